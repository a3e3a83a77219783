//! Partitioning, message creation and stringification of marked markup.

#[path = "../util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{comment, el, element, text};
    use angular_i18n::expression_parser::Parser;
    use angular_i18n::i18n::{message_from_attribute, partition, stringify_nodes, Message};
    use angular_i18n::parse_util::ParseError;

    mod partition {
        use super::*;

        #[test]
        fn should_wrap_nodes_between_marker_comments() {
            let nodes = vec![comment("i18n: greeting"), text("Hi"), comment("/i18n")];
            let mut errors: Vec<ParseError> = Vec::new();

            let parts = partition(&nodes, &mut errors);

            assert!(errors.is_empty());
            assert_eq!(parts.len(), 1);
            assert!(parts[0].has_i18n);
            assert_eq!(parts[0].i18n.as_deref(), Some("greeting"));
            assert_eq!(parts[0].children, &[text("Hi")][..]);
            assert!(parts[0].root_element.is_none());
            assert!(parts[0].root_text_node.is_none());
        }

        #[test]
        fn should_report_missing_closing_comment() {
            let nodes = vec![comment("i18n: missing")];
            let mut errors = Vec::new();

            let parts = partition(&nodes, &mut errors);

            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].msg, "Missing closing 'i18n' comment.");
            assert_eq!(parts.len(), 1);
            assert!(parts[0].has_i18n);
            assert!(parts[0].children.is_empty());
            assert!(parts[0].source_span().is_none());
        }

        #[test]
        fn should_keep_nodes_seen_before_the_end_when_unterminated() {
            let nodes = vec![
                comment("i18n: missing"),
                text("a"),
                element("b", &[], vec![text("bold")]),
            ];
            let mut errors = Vec::new();

            let parts = partition(&nodes, &mut errors);

            assert_eq!(errors.len(), 1);
            assert_eq!(parts.len(), 1);
            assert_eq!(parts[0].children.len(), 2);
        }

        #[test]
        fn should_continue_after_closing_comment() {
            let nodes = vec![
                comment("i18n:m"),
                text("inside"),
                comment("/i18n"),
                text("after"),
            ];
            let mut errors = Vec::new();

            let parts = partition(&nodes, &mut errors);

            assert!(errors.is_empty());
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0].i18n.as_deref(), Some("m"));
            assert!(!parts[1].has_i18n);
            assert_eq!(parts[1].root_text_node.map(|t| t.value.as_str()), Some("after"));
        }

        #[test]
        fn should_use_i18n_attribute_on_elements() {
            let nodes = vec![
                element("div", &[("i18n", "meaning|desc")], vec![text("x")]),
                element("span", &[("class", "plain")], vec![text("y")]),
            ];
            let mut errors = Vec::new();

            let parts = partition(&nodes, &mut errors);

            assert_eq!(parts.len(), 2);
            assert!(parts[0].has_i18n);
            assert_eq!(parts[0].i18n.as_deref(), Some("meaning|desc"));
            assert_eq!(parts[0].root_element.map(|e| e.name.as_str()), Some("div"));
            assert_eq!(parts[0].children.len(), 1);
            assert!(!parts[1].has_i18n);
            assert_eq!(parts[1].i18n, None);
        }

        #[test]
        fn should_skip_unrelated_comments() {
            let nodes = vec![comment("just a note"), text("x")];
            let mut errors = Vec::new();

            let parts = partition(&nodes, &mut errors);

            assert_eq!(parts.len(), 1);
            assert!(parts[0].root_text_node.is_some());
            assert!(parts[0].children.is_empty());
        }
    }

    mod create_message {
        use super::*;

        #[test]
        fn should_split_marker_into_meaning_and_description() {
            let nodes = vec![comment("i18n: greet|a friendly hello"), text("Hi"), comment("/i18n")];
            let mut errors = Vec::new();
            let parts = partition(&nodes, &mut errors);

            let message = parts[0].create_message(&Parser::new());

            assert_eq!(
                message,
                Message::new(
                    "Hi".to_string(),
                    Some("greet".to_string()),
                    Some("a friendly hello".to_string())
                )
            );
        }

        #[test]
        fn should_leave_meaning_empty_for_bare_marker() {
            let nodes = vec![element("p", &[("i18n", "")], vec![text("Hi")])];
            let mut errors = Vec::new();
            let parts = partition(&nodes, &mut errors);

            let message = parts[0].create_message(&Parser::new());

            assert_eq!(message.meaning, None);
            assert_eq!(message.description, None);
        }

        #[test]
        fn should_build_message_from_attribute() {
            let img = el("img", &[("i18n-title", "m|d"), ("title", "Hi {{name}}")], vec![]);

            let message = message_from_attribute(&Parser::new(), &img, &img.attrs[0]).unwrap();

            assert_eq!(message.content, "Hi <ph name=\"0\"/>");
            assert_eq!(message.meaning.as_deref(), Some("m"));
            assert_eq!(message.description.as_deref(), Some("d"));
        }

        #[test]
        fn should_fail_when_marked_attribute_is_missing() {
            let img = el("img", &[("i18n-title", "m")], vec![]);

            let err = message_from_attribute(&Parser::new(), &img, &img.attrs[0]).unwrap_err();

            assert_eq!(err.msg, "Missing attribute 'title'.");
        }
    }

    mod stringify {
        use super::*;

        #[test]
        fn should_wrap_elements_and_interpolations_in_placeholders() {
            let nodes = vec![element("b", &[], vec![text("{{name}}")])];

            assert_eq!(
                stringify_nodes(&nodes, &Parser::new()),
                "<ph name=\"e0\"><ph name=\"t1\"><ph name=\"0\"/></ph></ph>"
            );
        }

        #[test]
        fn should_keep_literal_text_around_expressions() {
            let nodes = vec![text("Hello {{first}} and {{last}}!")];

            assert_eq!(
                stringify_nodes(&nodes, &Parser::new()),
                "<ph name=\"t0\">Hello <ph name=\"0\"/> and <ph name=\"1\"/>!</ph>"
            );
        }

        #[test]
        fn should_not_reuse_indices_across_the_subtree() {
            let nodes = vec![
                element("b", &[], vec![text("x")]),
                text("y {{a}}"),
                element("i", &[], vec![]),
            ];

            assert_eq!(
                stringify_nodes(&nodes, &Parser::new()),
                "<ph name=\"e0\">x</ph><ph name=\"t2\">y <ph name=\"0\"/></ph><ph name=\"e3\"></ph>"
            );
        }

        #[test]
        fn should_drop_comments() {
            let nodes = vec![text("a"), comment("note"), text("b")];

            assert_eq!(stringify_nodes(&nodes, &Parser::new()), "ab");
        }

        #[test]
        fn should_fall_back_to_raw_text_on_blank_expression() {
            let nodes = vec![text("a {{ }} b")];

            assert_eq!(stringify_nodes(&nodes, &Parser::new()), "a {{ }} b");
        }

        #[test]
        fn should_restart_indices_on_each_call() {
            let nodes = vec![element("b", &[], vec![])];
            let parser = Parser::new();

            assert_eq!(stringify_nodes(&nodes, &parser), "<ph name=\"e0\"></ph>");
            assert_eq!(stringify_nodes(&nodes, &parser), "<ph name=\"e0\"></ph>");
        }
    }
}
