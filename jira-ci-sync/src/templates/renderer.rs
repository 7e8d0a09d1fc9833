//! Template renderer.

use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (Jira wiki markup uses `|`, `[` and emoji verbatim)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders comment and description templates.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the test report comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is invalid or references an unknown variable.
    pub fn render_comment(
        &self,
        template: &str,
        author: &str,
        repository: &str,
        table: &str,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "author": author,
            "repository": repository,
            "table": table
        });

        self.render_template(template, &data)
    }

    /// Renders an issue description. `author` is omitted from the template
    /// data when unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is invalid or references an unknown variable.
    pub fn render_description(
        &self,
        template: &str,
        author: Option<&str>,
        repository: &str,
    ) -> Result<String, super::TemplateError> {
        let mut data = json!({ "repository": repository });
        if let Some(author) = author {
            data["author"] = Value::from(author);
        }

        self.render_template(template, &data)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
