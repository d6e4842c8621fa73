//! Parsing of the `user@host` positional argument.

use crate::domain::PartialTarget;

/// Split a `user@host`-like spec into whatever parts it names.
///
/// - `user@host` splits on the first `@` only, so `a@b@c` is user `a`, host `b@c`.
/// - Without `@`, digits and dots only (`192.168.1.1`) is a host.
/// - Anything else is a user.
///
/// Empty input and empty halves of a split count as not given.
pub fn parse_target_spec(spec: Option<&str>) -> PartialTarget {
    let Some(spec) = spec.filter(|s| !s.is_empty()) else {
        return PartialTarget::default();
    };

    if let Some((user, host)) = spec.split_once('@') {
        return PartialTarget {
            user: non_empty(user),
            host: non_empty(host),
        };
    }

    if is_numeric_address(spec) {
        PartialTarget::host(spec)
    } else {
        PartialTarget::user(spec)
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// At least one digit, nothing but digits and dots.
fn is_numeric_address(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit()) && s.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice@example.com", Some("alice"), Some("example.com"))]
    #[case("a@b@c", Some("a"), Some("b@c"))]
    #[case("root@10.0.0.1", Some("root"), Some("10.0.0.1"))]
    #[case("alice@", Some("alice"), None)]
    #[case("@example.com", None, Some("example.com"))]
    #[case("@", None, None)]
    #[case("192.168.1.1", None, Some("192.168.1.1"))]
    #[case("42", None, Some("42"))]
    #[case("alice", Some("alice"), None)]
    #[case("host.example.com", Some("host.example.com"), None)]
    #[case("10.0.0.1a", Some("10.0.0.1a"), None)]
    #[case("...", Some("..."), None)]
    fn given_spec_when_parse_then_splits_expected_fields(
        #[case] spec: &str,
        #[case] user: Option<&str>,
        #[case] host: Option<&str>,
    ) {
        let parsed = parse_target_spec(Some(spec));
        assert_eq!(parsed.user.as_deref(), user);
        assert_eq!(parsed.host.as_deref(), host);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn given_missing_spec_when_parse_then_nothing_known(#[case] spec: Option<&str>) {
        assert_eq!(parse_target_spec(spec), PartialTarget::default());
    }
}
