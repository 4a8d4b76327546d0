//! Resource path templates with named `{placeholder}` segments
//!
//! Each operation owns a fixed template; values are URL-encoded on
//! substitution and a render with a missing or unknown placeholder fails
//! before anything reaches the transport.

use thiserror::Error;

/// The format placeholder is not a caller parameter; it always resolves
/// to `json`.
const FORMAT_PLACEHOLDER: &str = "{format}";
const FORMAT_JSON: &str = "json";

/// A resource path containing zero or more `{name}` placeholder segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    template: &'static str,
    placeholders: Vec<&'static str>,
}

impl PathTemplate {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            placeholders: parse_placeholders(template),
        }
    }

    pub fn as_str(&self) -> &str {
        self.template
    }

    /// Substitute every placeholder with the URL-encoded value supplied for
    /// its name. All placeholders in the template must be covered and every
    /// supplied name must appear in the template.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, TemplateError> {
        for (name, _) in params {
            if !self.placeholders.iter().any(|p| p == name) {
                return Err(TemplateError::UnknownParameter {
                    name: name.to_string(),
                    template: self.template.to_string(),
                });
            }
        }

        let mut path = self.template.replace(FORMAT_PLACEHOLDER, FORMAT_JSON);
        for placeholder in &self.placeholders {
            let value = params
                .iter()
                .find(|(name, _)| name == placeholder)
                .map(|(_, value)| *value)
                .ok_or_else(|| TemplateError::MissingParameter {
                    name: placeholder.to_string(),
                    template: self.template.to_string(),
                })?;
            let segment = format!("{{{}}}", placeholder);
            path = path.replace(&segment, &urlencoding::encode(value));
        }
        Ok(path)
    }
}

fn parse_placeholders(template: &'static str) -> Vec<&'static str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if name != "format" {
                    names.push(name);
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

/// Path template errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("missing value for path parameter '{name}' in template '{template}'")]
    MissingParameter { name: String, template: String },
    #[error("unknown path parameter '{name}' for template '{template}'")]
    UnknownParameter { name: String, template: String },
}
