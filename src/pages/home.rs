// Static homepage listing the deliverables still to be built

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use std::backtrace::Backtrace;
use tracing::{error, info, instrument};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

/// One line of the checklist
#[derive(Debug)]
pub struct ChecklistItem {
    pub icon: &'static str,
    pub label: &'static str,
    /// Text between the label and the first `<code>` entry
    pub lead: &'static str,
    /// Rendered as `<code>`, comma separated
    pub code: &'static [&'static str],
    pub trail: &'static str,
}

pub const CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        icon: "🏠",
        label: "Core UI – Layout & Navigation",
        lead: " (edit ",
        code: &["templates/layout.html"],
        trail: ")",
    },
    ChecklistItem {
        icon: "🎮",
        label: "Games page data",
        lead: " (edit ",
        code: &["templates/games.html"],
        trail: ")",
    },
    ChecklistItem {
        icon: "🔗",
        label: "SEO metadata",
        lead: " via ",
        code: &["SiteMetadata::page_title"],
        trail: "",
    },
    ChecklistItem {
        icon: "⚡",
        label: "Performance tweaks (fonts, asset caching, etc.)",
        lead: "",
        code: &[],
        trail: "",
    },
    ChecklistItem {
        icon: "🚧",
        label: "API route",
        lead: " → ",
        code: &["src/api/games/handler.rs"],
        trail: "",
    },
    ChecklistItem {
        icon: "🚧",
        label: "Integration test",
        lead: " → ",
        code: &["tests/api_routes/games.rs"],
        trail: "",
    },
    ChecklistItem {
        icon: "🚧",
        label: "Dockerfile & .dockerignore",
        lead: "",
        code: &[],
        trail: "",
    },
    ChecklistItem {
        icon: "🚧",
        label: "Monitoring stubs",
        lead: " → ",
        code: &["src/monitoring/web_vitals.rs", "src/api/metrics/handler.rs"],
        trail: "",
    },
];

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub title: String,
    pub description: &'a str,
    pub checklist: &'static [ChecklistItem],
}

#[instrument(fields(backtrace = ?Backtrace::capture()), skip(state))]
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, HandlerResponse> {
    info!("Home page requested");

    let page: HomeTemplate<'_> = HomeTemplate {
        title: state.site.page_title(None),
        description: &state.site.description,
        checklist: CHECKLIST,
    };

    page.render().map(Html).map_err(|err| {
        error!("Failed to render home page: {:?}", err);
        HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
            .message("Failed to render home page")
    })
}
