#![cfg(test)]
mod tests {
    use crate::error::ScrubError;
    use crate::table::{emoji::EMOJI, emoticons::EMOTICONS, PatternTable};
    use std::sync::Arc;

    #[test]
    fn test_builtin_is_shared() {
        assert!(Arc::ptr_eq(&PatternTable::builtin(), &PatternTable::builtin()));
    }

    #[test]
    fn test_builtin_keeps_declaration_order() {
        let table = PatternTable::builtin();
        assert_eq!(table.emoji_len(), EMOJI.len());
        assert_eq!(table.emoticons_len(), EMOTICONS.len());
        assert_eq!(table.emoticons()[0].pattern(), r":\)");
        assert_eq!(
            table.emoticons()[0].label,
            "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"
        );

        let symbols: Vec<&str> = table.emoji().map(|(symbol, _)| symbol).collect();
        let plain = symbols.iter().position(|s| *s == "👍").unwrap();
        let toned = symbols.iter().position(|s| *s == "👍🏻").unwrap();
        assert!(plain < toned);
    }

    #[test]
    fn test_new_rejects_bad_emoticon() {
        let err = PatternTable::new([("🙂", "SMILE")], [(r":\)", "HAPPY"), ("(:", "BROKEN")])
            .unwrap_err();
        match err {
            ScrubError::InvalidTableEntry { pattern, label, .. } => {
                assert_eq!(pattern, "(:");
                assert_eq!(label, "BROKEN");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_substitute_emoji_walks_in_reverse() {
        let table = PatternTable::new([("ab", "X"), ("abc", "Y")], Vec::<(&str, &str)>::new())
            .unwrap();
        let result = table.substitute_emoji("abc ab", |label| format!("<{label}>"));
        assert_eq!(result, "<Y> <X>");
    }

    #[test]
    fn test_substitute_emoticons_walks_in_reverse() {
        let table = PatternTable::new(
            Vec::<(&str, &str)>::new(),
            [(r":\)", "HAPPY"), (r":\)\)", "VERY_HAPPY")],
        )
        .unwrap();
        let result = table.substitute_emoticons("ok :)) :)", |label| format!("[{label}]"));
        assert_eq!(result, "ok [VERY_HAPPY] [HAPPY]");
    }
}
