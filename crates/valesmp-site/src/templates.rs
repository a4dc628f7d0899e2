//! Compiled-in page templates.
//!
//! Templates are embedded at build time with `include_str!` so the
//! binary is self-contained; there is no template directory to deploy.
//! Rendering contexts are plain `serde_json` values built by the
//! handlers.

use minijinja::Environment;

/// The compiled template set for all site pages.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`minijinja::Error`] if any template has
    /// a syntax error. This is a build defect, not a runtime condition,
    /// so the binary fails fast at startup.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base", include_str!("../templates/base.html"))?;
        env.add_template("index", include_str!("../templates/index.html"))?;
        env.add_template("guide", include_str!("../templates/guide.html"))?;
        env.add_template("maps", include_str!("../templates/maps.html"))?;
        env.add_template("legal", include_str!("../templates/legal.html"))?;
        env.add_template("stats", include_str!("../templates/stats.html"))?;
        Ok(Self { env })
    }

    /// Render a template by name with the given context.
    pub fn render(
        &self,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_compile() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn index_renders_with_status_context() {
        let templates = Templates::new().ok();
        let context = serde_json::json!({
            "status": {
                "online": true,
                "players": 7,
                "max": 40,
                "version": "1.21.7",
                "motd": "Welcome to ValeSMP"
            }
        });
        let html = templates.and_then(|t| t.render("index", &context).ok());
        assert!(html.is_some_and(|h| h.contains('7')));
    }
}
