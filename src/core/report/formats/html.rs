//! HTML report generator
//!
//! The page is self-contained with embedded CSS. Course names and explanation text are
//! HTML-escaped by the template engine.

use crate::core::report::{ReportContext, ReportGenerator, ReportRow};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "recommendation.html")]
struct HtmlTemplate<'a> {
    ctx: &'a ReportContext<'a>,
    rows: Vec<ReportRow>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
            ctx,
            rows: ctx.rows(),
        };
        Ok(template.render()?)
    }
}
