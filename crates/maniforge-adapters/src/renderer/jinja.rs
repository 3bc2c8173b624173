//! Jinja-style substitution renderer backed by minijinja.

use minijinja::{Environment, UndefinedBehavior};

use maniforge_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateData,
    error::ManiforgeResult,
};
use tracing::instrument;

/// Production renderer using minijinja variable interpolation.
///
/// Undefined-key policy: lenient. A placeholder with no matching variable
/// substitutes the empty string instead of failing the item, matching the
/// default of the engine the templates were written for.
pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        // Outputs are YAML, not HTML.
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
        Self { env }
    }
}

impl Default for JinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip_all)]
    fn render(&self, source: &str, data: &TemplateData) -> ManiforgeResult<String> {
        self.env.render_str(source, data).map_err(|e| {
            ApplicationError::RenderFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maniforge_core::domain::{TemplateData, service_data};

    fn render(source: &str, data: &TemplateData) -> String {
        JinjaRenderer::new().render(source, data).unwrap()
    }

    #[test]
    fn substitutes_a_single_variable() {
        let data = TemplateData::new().with("x", "v");
        assert_eq!(render("a {{x}} b", &data), "a v b");
    }

    #[test]
    fn substitutes_with_whitespace_inside_markers() {
        let data = TemplateData::new().with("x", "v");
        assert_eq!(render("a {{ x }} b", &data), "a v b");
    }

    #[test]
    fn undefined_key_renders_as_empty_string() {
        let data = TemplateData::new();
        assert_eq!(render("a {{ missing }} b", &data), "a  b");
    }

    #[test]
    fn integer_values_render_bare() {
        let data = TemplateData::new().with("port", 80);
        assert_eq!(render("port: {{ port }}", &data), "port: 80");
    }

    #[test]
    fn service_template_renders_fixed_service_name() {
        let source = "apiVersion: {{ service_apiVersion }}\n\
                      kind: {{ service_kind }}\n\
                      metadata:\n\
                      \x20 name: {{ service_name }}\n";
        let rendered = render(source, &service_data());
        assert!(rendered.contains("my-service"));
        assert!(rendered.contains("kind: Service"));
    }

    #[test]
    fn malformed_template_reports_render_failure() {
        let data = TemplateData::new().with("x", "v");
        let result = JinjaRenderer::new().render("a {{ x } b", &data);
        assert!(result.is_err());
    }
}
