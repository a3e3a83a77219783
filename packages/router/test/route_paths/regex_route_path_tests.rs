//! Regex matching with caller-supplied serializers.

#[path = "../util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::utils::params;
    use angular_router::rules::route_paths::{GeneratedUrl, RegexRoutePath, RoutePath};
    use angular_router::{parse_url, Params, RouterError};

    fn serializer() -> angular_router::rules::route_paths::RegexSerializer {
        Arc::new(|params: &Params| {
            let a = params.get("a").map(ToString::to_string).unwrap_or_default();
            let b = params.get("b").map(ToString::to_string).unwrap_or_default();
            GeneratedUrl::new(format!("{}/{}", a, b), Params::new())
        })
    }

    #[test]
    fn should_have_a_fixed_shape() {
        let path = RegexRoutePath::new("^(.+)/(.+)$", serializer()).unwrap();
        assert_eq!(path.specificity(), "2");
        assert!(path.terminal());
        assert_eq!(path.hash(), "^(.+)/(.+)$");
        assert_eq!(path.to_string(), "^(.+)/(.+)$");
    }

    #[test]
    fn should_name_capture_groups_by_position() {
        let path = RegexRoutePath::new("^(.+)/(.+)$", serializer()).unwrap();
        let url = parse_url("/hello/world").unwrap();

        let matched = path.match_url(&url).unwrap();
        assert_eq!(matched.url_path, "hello/world");
        assert_eq!(
            matched.all_params,
            params(&[("0", "hello/world"), ("1", "hello"), ("2", "world")])
        );
        assert!(matched.rest.is_none());
    }

    #[test]
    fn should_not_match_when_the_regex_does_not() {
        let path = RegexRoutePath::new("^(.+)/(.+)$", serializer()).unwrap();
        assert!(path.match_url(&parse_url("/hello").unwrap()).is_none());
    }

    #[test]
    fn should_generate_with_the_serializer() {
        let path = RegexRoutePath::new("^(.+)/(.+)$", serializer()).unwrap();
        let generated = path.generate_url(&params(&[("a", "x"), ("b", "y")])).unwrap();
        assert_eq!(generated.url_path, "x/y");
    }

    #[test]
    fn should_reject_an_invalid_regex() {
        let err = RegexRoutePath::new("(", serializer()).unwrap_err();
        assert!(matches!(err, RouterError::InvalidRegex { .. }));
    }
}
