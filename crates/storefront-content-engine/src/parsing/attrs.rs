//! Attribute lookup inside an opening tag.
//!
//! Attributes are walked as `name=value` pairs from left to right, so text
//! inside another attribute's quoted value is never mistaken for a name.

use std::sync::LazyLock;

use regex::Regex;

static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("attribute pattern is valid")
});

/// Value of the first attribute called `name` (ASCII case-insensitive) in
/// the attribute text of an opening tag. A bare attribute has the value `""`.
pub fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    ATTR.captures_iter(attrs)
        .find(|c| c[1].eq_ignore_ascii_case(name))
        .map(|c| {
            c.get(2)
                .or_else(|| c.get(3))
                .or_else(|| c.get(4))
                .map_or("", |m| m.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#" class="nav auto-link""#, "class", Some("nav auto-link"))]
    #[case(" CLASS='x'", "class", Some("x"))]
    #[case(" class=x href=/y", "class", Some("x"))]
    #[case(" hidden class = \"a\"", "hidden", Some(""))]
    #[case(r#" id="first" id="second""#, "id", Some("first"))]
    #[case(r#" data-id="x""#, "id", None)]
    #[case(r#" title="see class=auto-link docs""#, "class", None)]
    #[case(r#" title='x id=y'"#, "id", None)]
    #[case("", "id", None)]
    fn attribute_cases(#[case] attrs: &str, #[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(attribute(attrs, name), expected);
    }
}
