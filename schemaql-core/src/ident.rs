//! Identifier sanitization.
//!
//! Every table and column name goes through [`sanitize`] before it reaches the
//! output: characters outside `[A-Za-z0-9_-]` are dropped. The result is then
//! wrapped in backticks unless [`RenderOptions::quote_identifiers`] is off.
//!
//! Literal values are not touched here; see [`Value::to_literal`](crate::Value::to_literal).

use crate::config::RenderOptions;

/// Strip every character that is not an ASCII letter, digit, underscore or hyphen.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Sanitize and wrap in backticks.
pub fn quote(name: &str) -> String {
    format!("`{}`", sanitize(name))
}

/// Render a single identifier according to `options`.
pub fn render(name: &str, options: &RenderOptions) -> String {
    if options.quote_identifiers {
        quote(name)
    } else {
        sanitize(name)
    }
}

/// Render a `table.column` reference; each part is sanitized on its own so the
/// separating dot survives.
pub fn render_qualified(table: &str, column: &str, options: &RenderOptions) -> String {
    format!("{}.{}", render(table, options), render(column, options))
}

/// Render each identifier of a list, in order.
pub fn render_list<S: AsRef<str>>(names: &[S], options: &RenderOptions) -> Vec<String> {
    names
        .iter()
        .map(|name| render(name.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize("user_name-2"), "user_name-2");
        assert_eq!(sanitize("userName"), "userName");
    }

    #[test]
    fn test_sanitize_strips_hostile_characters() {
        assert_eq!(sanitize("users`; DROP TABLE users; --"), "usersDROPTABLEusers--");
        assert_eq!(sanitize("a.b c"), "abc");
        assert_eq!(sanitize("naïve"), "nave");
        assert_eq!(sanitize("!!!"), "");
    }

    #[test]
    fn test_quote_wraps_sanitized_name() {
        assert_eq!(quote("id"), "`id`");
        assert_eq!(quote("i`d"), "`id`");
    }

    #[test]
    fn test_render_follows_options() {
        let quoted = RenderOptions::default();
        let plain = RenderOptions::plain();
        assert_eq!(render("us ers", &quoted), "`users`");
        assert_eq!(render("us ers", &plain), "users");
    }

    #[test]
    fn test_render_qualified() {
        let quoted = RenderOptions::default();
        assert_eq!(render_qualified("posts", "userId", &quoted), "`posts`.`userId`");
        assert_eq!(
            render_qualified("po.sts", "user Id", &RenderOptions::plain()),
            "posts.userId"
        );
    }

    #[test]
    fn test_render_list_preserves_order() {
        let names = ["b", "a", "b"];
        assert_eq!(
            render_list(&names, &RenderOptions::default()),
            vec!["`b`", "`a`", "`b`"]
        );
    }
}
