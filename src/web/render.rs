//! Handlebars page rendering

use handlebars::Handlebars;

use super::error::WebError;
use super::view::PageView;
use crate::form::FormState;

const HOME_TEMPLATE: &str = "home";

/// Compiled page templates
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Compile the embedded templates
    pub fn new() -> Result<Self, WebError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_template_string(HOME_TEMPLATE, include_str!("templates/home.hbs"))?;
        Ok(Self { handlebars })
    }

    pub fn render_view(&self, view: &PageView) -> Result<String, WebError> {
        Ok(self.handlebars.render(HOME_TEMPLATE, view)?)
    }

    /// Render the form page for the given query state
    pub fn render_page(&self, state: &FormState) -> Result<String, WebError> {
        self.render_view(&PageView::from_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldErrors;

    fn render(pairs: &[(&str, &str)]) -> String {
        let state: FormState = pairs.iter().copied().collect();
        Renderer::new().unwrap().render_page(&state).unwrap()
    }

    #[test]
    fn test_first_step_is_visible() {
        let html = render(&[]);
        assert!(html.contains(r#"<section id="business">"#));
        assert!(html.contains(r#"<section id="contact" hidden>"#));
        assert!(html.contains(r#"<section id="review" class="review" hidden>"#));
        assert!(html.contains(r#"<input type="hidden" name="step" value="1">"#));
        assert!(html.contains("Continue"));
    }

    #[test]
    fn test_field_values_are_escaped() {
        let html = render(&[("businessName", "<Acme & \"Sons\">")]);
        assert!(!html.contains("<Acme"));
        assert!(html.contains("&lt;Acme &amp; "));
    }

    #[test]
    fn test_field_errors_render_next_to_fields() {
        let errors: FieldErrors = [("zip", "ZIP code is wrong")].into_iter().collect();
        let state = [("zip", "1")]
            .into_iter()
            .collect::<FormState>()
            .with("error", errors.encode());
        let html = Renderer::new().unwrap().render_page(&state).unwrap();

        assert!(html.contains(r#"<p id="zip-error" class="field-error" role="alert">ZIP code is wrong</p>"#));
        assert!(!html.contains("businessName-error"));
    }

    #[test]
    fn test_contact_step_marks_phone_required() {
        let html = render(&[("step", "2"), ("country", "Japan")]);
        assert!(html.contains(r#"<section id="contact">"#));
        assert!(html.contains(r#"type="tel" value="" placeholder="090-1234-5678" required"#));
        assert!(html.contains("In Progress"));
    }

    #[test]
    fn test_success_page() {
        let html = render(&[("step", "3"), ("type", "success"), ("message", "Created")]);
        assert!(html.contains("notice-success"));
        assert!(html.contains("Created"));
        assert!(html.contains("Start Over"));
        assert!(!html.contains("Confirm &amp; Submit"));
        assert!(!html.contains(">Edit<"));
    }

    #[test]
    fn test_error_page_keeps_submit_button() {
        let html = render(&[("step", "3"), ("type", "error"), ("message", "Service down")]);
        assert!(html.contains("notice-error"));
        assert!(html.contains("Service down"));
        assert!(html.contains("Confirm &amp; Submit"));
        assert!(html.contains(">Edit<"));
    }
}
