use std::sync::OnceLock;

use tera::Tera;
use tracing::info;

/// Shown on the landing page; the front end types it out character by
/// character.
const TAGLINE: &str = "Empowering Canadian Retail Investors in Fixed Income Markets";

#[derive(Debug)]
pub struct TemplateManager {
    tera: &'static Tera,
}

impl TemplateManager {
    pub fn init() -> Self {
        info!(
            "{:<20} - Initializing the Template manager",
            "templ manager"
        );
        static TERA: OnceLock<Tera> = OnceLock::new();
        let tera = TERA.get_or_init(|| {
            Tera::new("templates/**/*").unwrap_or_else(|e| panic!("Parsing error(s): {e}"))
        });
        Self { tera }
    }

    /// A helper function to render a template file from the 'html/' directory
    /// to String with the provided `Context`.
    pub fn render_html_to_string(
        &self,
        template_file: &str,
        ctx: &tera::Context,
    ) -> Result<String, tera::Error> {
        let template = format!("html/{template_file}");
        self.tera.render(&template, ctx)
    }

    pub fn tagline(&self) -> &'static str {
        TAGLINE
    }
}
