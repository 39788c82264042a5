use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::charts;
use crate::data::{DashboardState, PAYLOAD_STEP};
use crate::models::ALL_SITES;

use super::page;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Layout
// ============================================================

/// The dashboard layout page, rendered with the current control parameters
/// baked in (site options, payload bounds, defaults).
pub async fn index(State(state): State<DashboardState>) -> Html<String> {
    Html(page::render(&state))
}

/// Control ranges for API clients. The layout page bakes the same values in.
pub async fn meta(State(state): State<DashboardState>) -> Json<serde_json::Value> {
    let (min, max) = state.payload_bounds();
    Json(serde_json::json!({
        "sites": state.sites(),
        "payload_bounds": [min, max],
        "payload_step": PAYLOAD_STEP,
    }))
}

// ============================================================
// Figures
// ============================================================

/// Query parameters for the pie figure.
#[derive(Debug, Deserialize)]
pub struct PieQuery {
    /// Selected site; missing means the "All" sentinel.
    pub site: Option<String>,
}

pub async fn pie_chart(
    State(state): State<DashboardState>,
    Query(query): Query<PieQuery>,
) -> Json<serde_json::Value> {
    let site = query.site.as_deref().unwrap_or(ALL_SITES);
    Json(charts::pie_figure(state.records(), site))
}

/// Query parameters for the scatter figure. Missing endpoints fall back to
/// the full payload bounds.
#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

pub async fn scatter_chart(
    State(state): State<DashboardState>,
    Query(query): Query<ScatterQuery>,
) -> Json<serde_json::Value> {
    let site = query.site.as_deref().unwrap_or(ALL_SITES);
    let (low, high) = state.clamp_range(query.low, query.high);
    Json(charts::scatter_figure(state.records(), site, low, high))
}
