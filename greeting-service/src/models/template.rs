use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const PLACEHOLDER: &str = "%s";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("greeting template must contain a `%s` placeholder")]
    MissingPlaceholder,
    #[error("greeting template must contain exactly one `%s` placeholder, found {0}")]
    MultiplePlaceholders(usize),
}

/// A greeting template split around its single `%s` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingTemplate {
    prefix: String,
    suffix: String,
}

impl GreetingTemplate {
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        match raw.matches(PLACEHOLDER).count() {
            0 => Err(TemplateError::MissingPlaceholder),
            1 => {
                let (prefix, suffix) = raw
                    .split_once(PLACEHOLDER)
                    .ok_or(TemplateError::MissingPlaceholder)?;
                Ok(Self {
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                })
            }
            n => Err(TemplateError::MultiplePlaceholders(n)),
        }
    }

    /// Substitute `name` verbatim at the placeholder.
    pub fn render(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + name.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(name);
        out.push_str(&self.suffix);
        out
    }
}

impl Default for GreetingTemplate {
    fn default() -> Self {
        Self {
            prefix: "Hello, ".to_string(),
            suffix: "!".to_string(),
        }
    }
}

impl FromStr for GreetingTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GreetingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, PLACEHOLDER, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renders_hello() {
        assert_eq!(GreetingTemplate::default().render("World"), "Hello, World!");
        assert_eq!(GreetingTemplate::default().to_string(), "Hello, %s!");
    }

    #[test]
    fn parse_matches_default() {
        assert_eq!(
            GreetingTemplate::parse("Hello, %s!").unwrap(),
            GreetingTemplate::default()
        );
    }

    #[test]
    fn placeholder_at_edges() {
        assert_eq!(GreetingTemplate::parse("%s").unwrap().render("x"), "x");
        assert_eq!(GreetingTemplate::parse("Hi %s").unwrap().render("Bob"), "Hi Bob");
        assert_eq!(GreetingTemplate::parse("%s, welcome").unwrap().render("Ann"), "Ann, welcome");
    }

    #[test]
    fn name_is_not_reinterpreted() {
        let template = GreetingTemplate::parse("Hello, %s!").unwrap();
        assert_eq!(template.render("%s"), "Hello, %s!");
    }

    #[test]
    fn rejects_missing_placeholder() {
        assert_eq!(
            GreetingTemplate::parse("Hello!"),
            Err(TemplateError::MissingPlaceholder)
        );
    }

    #[test]
    fn rejects_multiple_placeholders() {
        assert_eq!(
            "%s and %s".parse::<GreetingTemplate>(),
            Err(TemplateError::MultiplePlaceholders(2))
        );
    }
}
