//! Placeholder templates and their bindings.

use crate::error::{Error, Result};
use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Markup copied to the output as-is.
    Literal(String),
    /// A `{{NAME}}` placeholder, holding the name.
    Placeholder(String),
}

/// What to do with a placeholder that has no binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnboundPolicy {
    /// Fail the render with [`Error::Unbound`].
    #[default]
    Error,
    /// Emit the placeholder text unchanged.
    Keep,
}

/// A markup template parsed into literal and placeholder tokens.
///
/// Placeholders have the form `{{NAME}}` where `NAME` is made of ASCII letters,
/// digits and underscores. Any other `{{` is ordinary text.
///
/// Rendering walks the tokens once, so a bound value containing `{{...}}` is
/// emitted verbatim and never substituted again.
///
/// # Example
///
/// ```
/// use popcorntv_template::{Template, TemplateContext};
///
/// let template = Template::parse("<title>{{TITLE}}</title><text>{{YEAR}}</text>");
/// assert_eq!(template.placeholders(), vec!["TITLE", "YEAR"]);
///
/// let ctx = TemplateContext::new()
///     .with_var("TITLE", "Heat")
///     .with_var("YEAR", "1995");
/// assert_eq!(template.render(&ctx)?, "<title>Heat</title><text>1995</text>");
/// # Ok::<(), popcorntv_template::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
}

impl Template {
    /// Parse template text into tokens.
    pub fn parse(source: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            literal.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let name = after_open
                .find(CLOSE)
                .map(|end| &after_open[..end])
                .filter(|name| is_placeholder_name(name));

            match name {
                Some(name) => {
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Placeholder(name.to_string()));
                    rest = &after_open[name.len() + CLOSE.len()..];
                }
                None => {
                    // Not a placeholder: keep the first brace and rescan from the second,
                    // so "{{{NAME}}" still yields a placeholder.
                    literal.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self {
            source: source.to_string(),
            tokens,
        }
    }

    /// The text this template was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for token in &self.tokens {
            if let Token::Placeholder(name) = token {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Whether the template contains a placeholder with this name.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, Token::Placeholder(n) if n == name))
    }

    /// Return a copy of this template with every occurrence of a markup block removed.
    ///
    /// The block is matched against the template text, placeholders included,
    /// before anything is substituted.
    pub fn without_fragment(&self, fragment: &str) -> Self {
        if fragment.is_empty() || !self.source.contains(fragment) {
            return self.clone();
        }
        tracing::trace!(fragment, "removing fragment from template");
        Self::parse(&self.source.replace(fragment, ""))
    }

    /// Render the template against a context.
    ///
    /// Unbound placeholders are handled according to the context's [`UnboundPolicy`].
    pub fn render(&self, ctx: &TemplateContext) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Placeholder(name) => match (ctx.get(name), ctx.policy()) {
                    (Some(value), _) => out.push_str(value),
                    (None, UnboundPolicy::Keep) => {
                        out.push_str(OPEN);
                        out.push_str(name);
                        out.push_str(CLOSE);
                    }
                    (None, UnboundPolicy::Error) => return Err(Error::unbound(name.as_str())),
                },
            }
        }
        Ok(out)
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Placeholder bindings for rendering templates.
///
/// # Example
///
/// ```
/// use popcorntv_template::TemplateContext;
///
/// let ctx = TemplateContext::new()
///     .with_var("TITLE", "Heat")
///     .with_var("YEAR", "1995");
///
/// assert_eq!(ctx.substitute("{{TITLE}} ({{YEAR}})"), "Heat (1995)");
/// assert_eq!(ctx.substitute("{{UNKNOWN}}"), "{{UNKNOWN}}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
    policy: UnboundPolicy,
}

impl TemplateContext {
    /// Create a new empty template context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding.
    pub fn with_var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Set how unbound placeholders are rendered.
    pub fn with_policy(mut self, policy: UnboundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set a binding.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.vars.insert(key.to_string(), value.into());
    }

    /// Get a binding.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    pub fn policy(&self) -> UnboundPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Substitute bindings in a string in a single pass.
    ///
    /// Unbound placeholders are left in place whatever the context's policy.
    pub fn substitute(&self, template: &str) -> String {
        let template = Template::parse(template);
        let mut out = String::with_capacity(template.source.len());
        for token in &template.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Placeholder(name) => match self.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str(OPEN);
                        out.push_str(name);
                        out.push_str(CLOSE);
                    }
                },
            }
        }
        out
    }

    /// Substitute bindings in a list of strings.
    pub fn substitute_all(&self, templates: &[String]) -> Vec<String> {
        templates.iter().map(|t| self.substitute(t)).collect()
    }
}
