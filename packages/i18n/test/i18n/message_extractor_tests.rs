//! Whole-tree message extraction.

#[path = "../util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{comment, element, text};
    use angular_i18n::i18n::{remove_duplicates, Message, MessageExtractor};

    fn msg(content: &str, meaning: Option<&str>, description: Option<&str>) -> Message {
        Message::new(
            content.to_string(),
            meaning.map(str::to_string),
            description.map(str::to_string),
        )
    }

    #[test]
    fn should_extract_from_marked_elements_and_their_attributes() {
        let nodes = vec![element(
            "div",
            &[("i18n", "m|d")],
            vec![
                text("Hello"),
                element("img", &[("i18n-alt", ""), ("alt", "pic")], vec![]),
            ],
        )];

        let res = MessageExtractor::new().extract(&nodes);

        assert!(res.errors.is_empty());
        assert_eq!(
            res.messages,
            vec![
                msg("Hello<ph name=\"e1\"></ph>", Some("m"), Some("d")),
                msg("pic", None, None),
            ]
        );
    }

    #[test]
    fn should_recurse_into_unmarked_elements() {
        let nodes = vec![element(
            "div",
            &[],
            vec![comment("i18n: x"), text("Inner"), comment("/i18n")],
        )];

        let res = MessageExtractor::new().extract(&nodes);

        assert_eq!(res.messages, vec![msg("Inner", Some("x"), None)]);
    }

    #[test]
    fn should_extract_attributes_of_root_elements() {
        let nodes = vec![element(
            "input",
            &[("i18n-placeholder", "hint|shown when empty"), ("placeholder", "Name")],
            vec![],
        )];

        let res = MessageExtractor::new().extract(&nodes);

        assert_eq!(
            res.messages,
            vec![msg("Name", Some("hint"), Some("shown when empty"))]
        );
    }

    #[test]
    fn should_collect_missing_attribute_errors() {
        let nodes = vec![element("input", &[("i18n-placeholder", "")], vec![])];

        let res = MessageExtractor::new().extract(&nodes);

        assert!(res.messages.is_empty());
        assert_eq!(res.errors.len(), 1);
        assert_eq!(res.errors[0].msg, "Missing attribute 'placeholder'.");
    }

    #[test]
    fn should_collect_unterminated_comment_errors_and_keep_going() {
        let nodes = vec![
            element("p", &[("i18n", "")], vec![text("first")]),
            comment("i18n: second"),
            text("tail"),
        ];

        let res = MessageExtractor::new().extract(&nodes);

        assert_eq!(res.errors.len(), 1);
        assert_eq!(
            res.messages,
            vec![msg("first", None, None), msg("tail", Some("second"), None)]
        );
    }

    #[test]
    fn should_reset_state_between_extractions() {
        let mut extractor = MessageExtractor::new();
        extractor.extract(&[element("input", &[("i18n-title", "")], vec![])]);

        let res = extractor.extract(&[element("p", &[("i18n", "")], vec![text("ok")])]);

        assert!(res.errors.is_empty());
        assert_eq!(res.messages, vec![msg("ok", None, None)]);
    }

    #[test]
    fn should_summarize_as_json() {
        let nodes = vec![element("p", &[("i18n", "m")], vec![text("ok")])];

        let json = MessageExtractor::new().extract(&nodes).to_json();

        assert_eq!(json["messages"][0]["id"], "%24ng%7Cm%7Cok");
        assert_eq!(json["messages"][0]["content"], "ok");
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn should_remove_duplicate_messages() {
        let messages = vec![
            msg("a", Some("m"), Some("first")),
            msg("b", None, None),
            msg("a", Some("m"), Some("second")),
            msg("a", Some("other"), None),
        ];

        assert_eq!(
            remove_duplicates(messages),
            vec![
                msg("a", Some("m"), Some("first")),
                msg("b", None, None),
                msg("a", Some("other"), None),
            ]
        );
    }
}
