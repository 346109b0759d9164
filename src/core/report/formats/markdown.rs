//! Markdown report generator

use crate::core::report::{ReportContext, ReportGenerator, ReportRow};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "recommendation.md", escape = "none")]
struct MarkdownTemplate<'a> {
    ctx: &'a ReportContext<'a>,
    rows: Vec<ReportRow>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = MarkdownTemplate {
            ctx,
            rows: ctx.rows(),
        };
        Ok(template.render()?)
    }
}
