#![cfg(test)]
mod tests {
    use crate::error::ScrubError;
    use crate::pipeline::*;
    use crate::tools::{Clean, Collect, Replace};
    use crate::types::{Counts, EmoticonOptions, ExecuteOptions, ResultMap, Tally};

    #[test]
    fn test_len_counts_chain_calls() {
        let builder = crate::clean()
            .url()
            .nickname()
            .hashtag()
            .punctuation()
            .whitespace()
            .html()
            .emoji()
            .emoticon()
            .regexp("x");
        assert_eq!(builder.len(), 9);
        assert!(crate::replace().is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let builder = crate::collect().url().url();
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.steps()[0], builder.steps()[1]);
    }

    #[test]
    fn test_finalize_does_not_grow_steps() {
        let builder = crate::clean().url();
        let options = ExecuteOptions::default().with_lowercase(true);

        builder.execute("A").unwrap();
        builder.execute_with("B", options).unwrap();
        let compiled = builder.compile_with(options);

        assert_eq!(builder.len(), 1);
        assert_eq!(compiled.len(), 1);
        assert_eq!(builder.execute("  X  Y ").unwrap(), "X Y");
    }

    #[test]
    fn test_step_order_matters() {
        let input = "go #https://x.io now";

        let url_first = crate::clean().url().hashtag().execute(input).unwrap();
        assert_eq!(url_first, "go # now");

        let hashtag_first = crate::clean().hashtag().url().execute(input).unwrap();
        assert_eq!(hashtag_first, "go ://x.io now");
    }

    #[test]
    fn test_order_irrelevant_without_overlap() {
        let input = "#a https://x.io b";
        assert_eq!(
            crate::clean().url().hashtag().execute(input).unwrap(),
            crate::clean().hashtag().url().execute(input).unwrap()
        );
    }

    #[test]
    fn test_compiled_is_a_snapshot() {
        let builder = crate::clean().url();
        let compiled = builder.compile();
        let builder = builder.hashtag();

        assert_eq!(compiled.apply("#a https://x").unwrap(), "#a");
        assert_eq!(builder.execute("#a https://x").unwrap(), "");
    }

    #[test]
    fn test_compiled_is_repeatable() {
        let compiled = crate::replace().nickname().punctuation().compile();
        let first = compiled.apply("@bob: hi!").unwrap();
        let second = compiled.apply("@bob: hi!").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "TOKEN_NICKNAME TOKEN_PUNCTUATION hi TOKEN_PUNCTUATION");
    }

    #[test]
    fn test_compiled_options() {
        let compiled = crate::clean().compile_with(ExecuteOptions::default().with_lowercase(true));
        assert_eq!(compiled.apply("A  B").unwrap(), "a b");
        assert!(compiled.options().lowercase);
        assert!(compiled.is_empty());
    }

    #[test]
    fn test_compiled_collect_returns_tallies_in_order() {
        let compiled = crate::collect().hashtag().url().compile();
        let tallies = compiled.apply("#a https://b").unwrap();

        let hashtags: Counts = [("#a".to_string(), 1)].into();
        let urls: Counts = [("https://b".to_string(), 1)].into();
        assert_eq!(
            tallies,
            vec![Tally::new("hashtag", hashtags), Tally::new("url", urls)]
        );
        assert_eq!(tallies[0].total(), 1);
    }

    #[test]
    fn test_compiled_collect_batch() {
        let compiled = crate::collect().hashtag().compile();
        let result = compiled.batch_execute(["#a", "#a #b"]).unwrap();
        assert_eq!(result["hashtag"]["#a"], 2);
        assert_eq!(result["hashtag"]["#b"], 1);
        assert_eq!(compiled.execute("#b").unwrap()["hashtag"]["#b"], 1);
    }

    #[test]
    fn test_input_is_coerced_to_text() {
        assert_eq!(crate::clean().execute(42).unwrap(), "42");

        let result = crate::collect().regexp(r"\d").batch_execute([1, 22]).unwrap();
        let expected: Counts = [("1".to_string(), 1), ("2".to_string(), 2)].into();
        assert_eq!(result, ResultMap::from([("regexp".to_string(), expected)]));
    }

    #[test]
    fn test_json_round_trip() {
        let builder = crate::replace()
            .url_with("U")
            .emoticon()
            .regexp(r"\d+");
        let json = builder.to_json().unwrap();
        let restored = ReplaceBuilder::from_json(&json).unwrap();

        assert_eq!(restored.steps(), builder.steps());
        assert_eq!(
            restored.execute("1 https://x :)").unwrap(),
            "TOKEN_CUSTOM U TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = crate::clean().emoticon().hashtag().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"kind": "emoticon", "options": {"mask_urls": true, "mask_emoji": true}},
                {"kind": "hashtag"}
            ])
        );
    }

    #[test]
    fn test_json_defaults() {
        let builder =
            CollectBuilder::from_json(r#"[{"kind": "emoticon"}, {"kind": "url", "token": "X"}]"#)
                .unwrap();
        assert_eq!(
            builder.steps()[0].target,
            Target::Emoticon {
                options: EmoticonOptions::default()
            }
        );
        assert_eq!(builder.steps()[1].token.as_deref(), Some("X"));
    }

    #[test]
    fn test_json_errors() {
        let err = CleanBuilder::from_json(r#"[{"kind": "telepathy"}]"#).unwrap_err();
        assert!(matches!(err, ScrubError::Json(_)));
    }

    #[test]
    fn test_custom_step() {
        let step = Step::new(Target::Hashtag).with_token("TAG");
        let result = crate::replace().step(step).execute("#x y").unwrap();
        assert_eq!(result, "TAG y");
    }

    #[test]
    fn test_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Builder<Clean>>();
        assert_send_sync::<Builder<Replace>>();
        assert_send_sync::<Compiled<Collect>>();

        let compiled = crate::clean().hashtag().compile();
        let handle = {
            let compiled = compiled.clone();
            std::thread::spawn(move || compiled.apply("#a b").unwrap())
        };
        assert_eq!(handle.join().unwrap(), compiled.apply("#a b").unwrap());
    }
}
