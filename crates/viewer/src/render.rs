//! HTML rendering of the problems page.
//!
//! Markup lives in `templates/*.hbs` and is rendered with [`handlebars`],
//! which HTML-escapes every `{{value}}`. Markup classes (`problem-card`,
//! `stat-card`, `problem-status`, ...) are the hooks the site stylesheet
//! targets.

use handlebars::Handlebars;
use serde::Serialize;

use goldenpath_core::problem::ProblemRecord;

use crate::error::ViewerError;
use crate::viewer::ViewState;

pub const PAGE_TITLE: &str = "Problems While Developing";
pub const RESOLVED_BADGE: &str = "✓ Resolved";
pub const ONGOING_BADGE: &str = "⚠ Ongoing";
pub const FALLBACK_NOTICE: &str = "(Using fallback data)";

const PAGE_TEMPLATE: &str = include_str!("../templates/page.hbs");
const CARD_TEMPLATE: &str = include_str!("../templates/card.hbs");

#[derive(Debug, Serialize)]
struct PageView<'a> {
    title: &'a str,
    subtitle: &'a str,
    fallback_notice: Option<&'a str>,
    loading: bool,
    /// The error view replaces the list.
    failed: bool,
    error: &'a str,
    stats: Vec<StatView>,
    cards: Vec<CardView<'a>>,
}

#[derive(Debug, Serialize)]
struct StatView {
    value: usize,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct CardView<'a> {
    id: i64,
    status: &'a str,
    badge: &'static str,
    category: &'a str,
    date: &'a str,
    title: &'a str,
    description: &'a str,
    solution: &'a str,
}

impl<'a> From<&'a ProblemRecord> for CardView<'a> {
    /// The status string becomes a CSS class verbatim; only `resolved`
    /// gets the resolved badge.
    fn from(problem: &'a ProblemRecord) -> Self {
        Self {
            id: problem.id,
            status: problem.status.as_str(),
            badge: if problem.status.is_resolved() {
                RESOLVED_BADGE
            } else {
                ONGOING_BADGE
            },
            category: &problem.category,
            date: &problem.date,
            title: &problem.title,
            description: &problem.description,
            solution: &problem.solution,
        }
    }
}

impl<'a> PageView<'a> {
    /// Loading shows a placeholder. An error with no records shows the
    /// error view. Anything else shows the statistics header and the list,
    /// with a fallback notice when the records did not come from the service.
    fn from_state(state: &'a ViewState) -> Self {
        let mut view = Self {
            title: PAGE_TITLE,
            subtitle: "A collection of issues encountered during development and their solutions",
            fallback_notice: None,
            loading: false,
            failed: false,
            error: "",
            stats: Vec::new(),
            cards: Vec::new(),
        };

        match state.error() {
            _ if state.is_loading() => {
                view.subtitle = "Loading problems...";
                view.loading = true;
            }
            Some(error) if state.problems().is_empty() => {
                view.subtitle = "Failed to load problems";
                view.failed = true;
                view.error = error;
            }
            _ => {
                if state.using_fallback() {
                    view.fallback_notice = Some(FALLBACK_NOTICE);
                }
                let stats = state.stats();
                view.stats = vec![
                    StatView { value: stats.total, label: "Total Issues" },
                    StatView { value: stats.resolved, label: "Resolved" },
                    StatView { value: stats.ongoing, label: "Ongoing" },
                ];
                view.cards = state.problems().iter().map(CardView::from).collect();
            }
        }

        view
    }
}

/// Template registry for the page and its card partial.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ViewerError> {
        let mut registry = Handlebars::new();
        registry.register_template_string("page", PAGE_TEMPLATE)?;
        // Also reachable from the page as the `{{> card}}` partial.
        registry.register_template_string("card", CARD_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Render the page for `state`.
    pub fn render_page(&self, state: &ViewState) -> Result<String, ViewerError> {
        Ok(self.registry.render("page", &PageView::from_state(state))?)
    }

    /// One card on its own.
    pub fn render_card(&self, problem: &ProblemRecord) -> Result<String, ViewerError> {
        Ok(self.registry.render("card", &CardView::from(problem))?)
    }
}
