use std::fmt;

use crate::error::{GenerateError, Result};

/// The substitution slot every badge template must carry.
pub const SLOT: &str = "{repo}";

/// A badge line with one or more `{repo}` slots.
///
/// Construction validates the slot, so a `Template` can always be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    /// Parse `source`, failing with [`GenerateError::Template`] when it has no
    /// `{repo}` slot. `name` only identifies the template in error messages.
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        if !source.contains(SLOT) {
            return Err(GenerateError::Template {
                name: name.to_string(),
                template: source.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            source: source.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace every slot with `repo` verbatim. No URL or Markdown escaping.
    pub fn render(&self, repo: &str) -> String {
        self.source.replace(SLOT, repo)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_slot() {
        let template = Template::parse("pypi", "v/{repo}.svg").unwrap();
        assert_eq!(template.name(), "pypi");
        assert_eq!(template.to_string(), "v/{repo}.svg");
    }

    #[test]
    fn test_parse_rejects_missing_slot() {
        let err = Template::parse("ci", "https://example.com/badge.svg").unwrap_err();
        match err {
            GenerateError::Template { name, template } => {
                assert_eq!(name, "ci");
                assert_eq!(template, "https://example.com/badge.svg");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_misspelled_slot() {
        assert!(Template::parse("pypi", "v/{repos}.svg").is_err());
        assert!(Template::parse("pypi", "v/{ repo }.svg").is_err());
        assert!(Template::parse("pypi", "v/repo.svg").is_err());
    }

    #[test]
    fn test_render_replaces_every_slot() {
        let template = Template::parse("pypi", "[{repo}](https://pypi.org/project/{repo}/)").unwrap();
        assert_eq!(
            template.render("volttron-core"),
            "[volttron-core](https://pypi.org/project/volttron-core/)"
        );
    }

    #[test]
    fn test_render_is_verbatim() {
        let template = Template::parse("pypi", "v/{repo}.svg").unwrap();
        // No escaping: reserved characters pass straight through
        assert_eq!(template.render("a b&c"), "v/a b&c.svg");
    }

    #[test]
    fn test_render_keeps_other_braces() {
        let template = Template::parse("ci", "{org}/{repo}/{}").unwrap();
        assert_eq!(template.render("x"), "{org}/x/{}");
    }

    #[test]
    fn test_display_shows_source() {
        let template = Template::parse("ci", "b/{repo}").unwrap();
        assert_eq!(template.to_string(), "b/{repo}");
    }
}
