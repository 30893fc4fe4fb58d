// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};

use crate::api_server::AppState;
use crate::form::{parse_build_inputs, FormFields};
use crate::web::view_models::ReportView;

// ============================================================================
// App Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/app.html")]
pub struct AppTemplate {
    pub title: String,
    pub report: ReportView,
    pub errors: Vec<String>,
}

impl AppTemplate {
    fn new(report: ReportView, errors: Vec<String>) -> Self {
        Self {
            title: "Config Doctor".to_string(),
            report,
            errors,
        }
    }
}

fn render(template: AppTemplate) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template error: {}", e);
        format!("Template error: {}", e)
    }))
}

pub async fn app_page() -> impl IntoResponse {
    render(AppTemplate::new(ReportView::placeholder(), Vec::new()))
}

/// Form submission: validation errors are shown on the page, never as an error status
pub async fn app_submit(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> impl IntoResponse {
    match parse_build_inputs(&fields) {
        Ok(inputs) => {
            tracing::info!("Analyzing {} build from form", inputs.style);
            let report = state.analyze(&inputs);
            render(AppTemplate::new(ReportView::from(&report), Vec::new()))
        }
        Err(e) => {
            tracing::warn!("Validation error: {}", e);
            render(AppTemplate::new(ReportView::placeholder(), vec![e.to_string()]))
        }
    }
}
