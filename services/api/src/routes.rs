use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use storeops_pricing::error::AppError;
use storeops_pricing::import::TenantRosterImporter;
use storeops_pricing::pricing::{
    compute_comp_avg, compute_tier, evaluate_roster, price_facility, recommend_street_rate,
    CompetitorQuote, HierarchyViolation, LeasingActivity, OccupancyFraction, OccupancyPercent,
    PricedUnitGroup, Recommendation, TenantDecision, TenantPricingRecord, TierAssessment,
    UnitGroup,
};
use storeops_pricing::report::{EcriBatchSummary, StreetRateBatchSummary};
use storeops_pricing::review::{OVERRIDE_REASONS, VP_OVERRIDE_REASONS};

#[derive(Debug, Deserialize)]
pub(crate) struct TierRequest {
    pub(crate) current_rent: f64,
    pub(crate) unit_group_median: f64,
    pub(crate) street_rate: f64,
    pub(crate) unit_group_occupancy: OccupancyFraction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterCsvRequest {
    pub(crate) roster_csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EcriBatchResponse {
    pub(crate) decisions: Vec<TenantDecision>,
    pub(crate) summary: EcriBatchSummary,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StreetRateRequest {
    pub(crate) street_rate: f64,
    pub(crate) achieved_median: f64,
    pub(crate) occupancy_pct: OccupancyPercent,
    pub(crate) unit_size: String,
    pub(crate) total_units: u32,
    #[serde(default)]
    pub(crate) activity: LeasingActivity,
    /// Takes precedence over `competitors` when both are supplied.
    #[serde(default)]
    pub(crate) comp_weighted_avg: Option<f64>,
    #[serde(default)]
    pub(crate) competitors: Vec<CompetitorQuote>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FacilityResponse {
    pub(crate) groups: Vec<PricedUnitGroup>,
    pub(crate) violations: Vec<HierarchyViolation>,
    pub(crate) summary: StreetRateBatchSummary,
}

pub(crate) fn pricing_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/ecri/tier", post(ecri_tier_endpoint))
        .route("/api/v1/ecri/tenants", post(ecri_tenants_endpoint))
        .route("/api/v1/ecri/roster", post(ecri_roster_endpoint))
        .route(
            "/api/v1/street-rate/recommend",
            post(street_rate_recommend_endpoint),
        )
        .route(
            "/api/v1/street-rate/facility",
            post(street_rate_facility_endpoint),
        )
        .route("/api/v1/override-reasons", get(override_reasons_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn ecri_tier_endpoint(Json(payload): Json<TierRequest>) -> Json<TierAssessment> {
    Json(compute_tier(
        payload.current_rent,
        payload.unit_group_median,
        payload.street_rate,
        payload.unit_group_occupancy,
    ))
}

pub(crate) async fn ecri_tenants_endpoint(
    Json(records): Json<Vec<TenantPricingRecord>>,
) -> Json<EcriBatchResponse> {
    Json(ecri_batch(records))
}

pub(crate) async fn ecri_roster_endpoint(
    Json(payload): Json<RosterCsvRequest>,
) -> Result<Json<EcriBatchResponse>, AppError> {
    let reader = Cursor::new(payload.roster_csv.into_bytes());
    let records = TenantRosterImporter::from_reader(reader)?;
    Ok(Json(ecri_batch(records)))
}

fn ecri_batch(records: Vec<TenantPricingRecord>) -> EcriBatchResponse {
    let decisions = evaluate_roster(records);
    let summary = EcriBatchSummary::from_decisions(&decisions);
    EcriBatchResponse { decisions, summary }
}

pub(crate) async fn street_rate_recommend_endpoint(
    Json(payload): Json<StreetRateRequest>,
) -> Json<Recommendation> {
    let comp_weighted_avg = payload
        .comp_weighted_avg
        .unwrap_or_else(|| compute_comp_avg(&payload.competitors));

    Json(recommend_street_rate(
        payload.street_rate,
        payload.achieved_median,
        payload.occupancy_pct,
        &payload.unit_size,
        payload.total_units,
        &payload.activity,
        comp_weighted_avg,
    ))
}

pub(crate) async fn street_rate_facility_endpoint(
    Json(groups): Json<Vec<UnitGroup>>,
) -> Json<FacilityResponse> {
    let (groups, violations) = price_facility(groups);
    let summary = StreetRateBatchSummary::from_groups(&groups, &violations);
    Json(FacilityResponse {
        groups,
        violations,
        summary,
    })
}

pub(crate) async fn override_reasons_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "ecri": OVERRIDE_REASONS,
        "street_rate": VP_OVERRIDE_REASONS,
    }))
}
