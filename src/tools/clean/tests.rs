#![cfg(test)]
mod tests {
    use crate::error::ScrubError;
    use crate::tools::clean::*;
    use crate::types::ExecuteOptions;

    #[test]
    fn test_url() {
        let result = crate::clean()
            .url()
            .execute("Check https://a.io/x?q=1 and http://b.org now")
            .unwrap();
        assert_eq!(result, "Check and now");
    }

    #[test]
    fn test_ftp_is_not_a_url() {
        let result = crate::clean().url().execute("ftp://a.io stays").unwrap();
        assert_eq!(result, "ftp://a.io stays");
    }

    #[test]
    fn test_nickname() {
        let result = crate::clean().nickname().execute("hi @bob_42, meet @alice").unwrap();
        assert_eq!(result, "hi , meet");
    }

    #[test]
    fn test_hashtag() {
        let result = crate::clean().hashtag().execute("#rust is #1").unwrap();
        assert_eq!(result, "is");
    }

    #[test]
    fn test_punctuation_is_ascii_only() {
        assert_eq!(remove_ascii_punctuation("snake_case, «quoted»!"), "snakecase «quoted»");
        assert_eq!(remove_ascii_punctuation("a-b/c.d"), "abcd");
        assert_eq!(remove_ascii_punctuation("Café…"), "Café…");
    }

    #[test]
    fn test_whitespace() {
        let result = crate::clean()
            .whitespace()
            .execute_with("a\tb\nc\r\x0Bd\x0Ce", ExecuteOptions::raw())
            .unwrap();
        assert_eq!(result, "a b c  d e");
    }

    #[test]
    fn test_html() {
        let result = crate::clean().html().execute("<p>Hello <b>world</b></p>").unwrap();
        assert_eq!(result, "Hello world");
    }

    #[test]
    fn test_html_does_not_span_lines() {
        let result = crate::clean().html().execute("<a\nhref>x").unwrap();
        assert_eq!(result, "<a href>x");
    }

    #[test]
    fn test_emoji_prefers_longer_sequences() {
        let result = crate::clean().emoji().execute("nice👍🏻work 🔥").unwrap();
        assert_eq!(result, "nice work");

        let result = crate::clean().emoji().execute("I ❤️ it").unwrap();
        assert_eq!(result, "I it");
    }

    #[test]
    fn test_emoticon_leaves_a_gap() {
        let result = crate::clean().emoticon().execute(":)word1:Dword2:)").unwrap();
        assert_eq!(result, "word1 word2");
    }

    #[test]
    fn test_regexp() {
        let result = crate::clean()
            .regexp(r"\d+")
            .execute("order 66 shipped 2 days")
            .unwrap();
        assert_eq!(result, "order shipped days");
    }

    #[test]
    fn test_invalid_regexp_fails_on_execute() {
        let builder = crate::clean().regexp("(unclosed");
        assert_eq!(builder.len(), 1);

        let err = builder.execute("text").unwrap_err();
        assert!(matches!(err, ScrubError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_lowercase() {
        let options = ExecuteOptions::default().with_lowercase(true);
        let result = crate::clean()
            .url()
            .execute_with("Hello WORLD https://x.io", options)
            .unwrap();
        assert_eq!(result, "hello world");
    }

    #[test]
    fn test_no_collapse_keeps_gaps() {
        let result = crate::clean()
            .hashtag()
            .execute_with("a #b c", ExecuteOptions::raw())
            .unwrap();
        assert_eq!(result, "a  c");
    }
}
