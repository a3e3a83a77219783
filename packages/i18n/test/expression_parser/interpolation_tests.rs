//! Interpolation splitting.

#[cfg(test)]
mod tests {
    use angular_i18n::expression_parser::{InterpolationSplitter, Parser};

    fn split(input: &str) -> (Vec<String>, Vec<String>) {
        let parsed = Parser::new()
            .split_interpolation(input, "TestComp")
            .expect("should split")
            .expect("should contain interpolation");
        (parsed.strings, parsed.expressions)
    }

    #[test]
    fn should_return_none_without_interpolation() {
        assert_eq!(Parser::new().split_interpolation("plain text", "TestComp"), Ok(None));
    }

    #[test]
    fn should_split_strings_and_expressions() {
        assert_eq!(
            split("Hello {{name}}!"),
            (vec!["Hello ".to_string(), "!".to_string()], vec!["name".to_string()])
        );
    }

    #[test]
    fn should_keep_empty_strings_between_adjacent_expressions() {
        let (strings, expressions) = split("{{a}}{{b}}");
        assert_eq!(strings, vec!["", "", ""]);
        assert_eq!(expressions, vec!["a", "b"]);
    }

    #[test]
    fn should_allow_multiline_expressions() {
        let (_, expressions) = split("{{\n a \n}}");
        assert_eq!(expressions, vec!["\n a \n"]);
    }

    #[test]
    fn should_reject_blank_expressions() {
        let err = Parser::new()
            .split_interpolation("a {{  }}", "TestComp")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Parser Error: Blank expressions are not allowed in interpolated strings at column 2 in [a {{  }}] in TestComp"
        );
    }
}
