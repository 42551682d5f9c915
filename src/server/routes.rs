use crate::analysis::{self, strategy};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::model::{Analysis, Leg, OptionsContract};
use crate::state::{AppState, CountersSnapshot};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use portable_atomic::Ordering::Relaxed;
use smallvec::SmallVec;
use std::sync::Arc;

/// POST /analyze -- risk/reward profile for 1-4 contracts
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<OptionsContract>>, JsonRejection>,
) -> Result<Json<Analysis>, AnalyzerError> {
    state.counters.requests_received.fetch_add(1, Relaxed);

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("analyze", %request_id);

    let result = span.in_scope(|| {
        let Json(contracts) = payload.map_err(|r| AnalyzerError::Parse(r.body_text()))?;
        run_analysis(&state, &contracts)
    });

    match result {
        Ok(analysis) => {
            state.counters.analyses_completed.fetch_add(1, Relaxed);
            tracing::info!(
                %request_id,
                points = analysis.risk_reward_graph.len(),
                max_profit = %analysis.max_profit,
                max_loss = %analysis.max_loss,
                "analysis complete"
            );
            Ok(Json(analysis))
        }
        Err(e) => {
            state.counters.requests_rejected.fetch_add(1, Relaxed);
            tracing::warn!(%request_id, error = %e, "analysis request rejected");
            Err(e)
        }
    }
}

/// Leg count first, then each contract's fields, then the engine.
fn run_analysis(state: &AppState, contracts: &[OptionsContract]) -> AnalyzerResult<Analysis> {
    strategy::check_leg_count(contracts.len())?;

    let now = chrono::Utc::now();
    for (i, contract) in contracts.iter().enumerate() {
        contract.validate(now).inspect_err(|e| {
            tracing::debug!(
                leg = i,
                kind = %contract.option_type,
                position = %contract.long_short,
                error = %e,
                "contract failed validation"
            );
        })?;
    }

    let legs: SmallVec<[Leg; strategy::MAX_LEGS]> = contracts.iter().map(OptionsContract::leg).collect();
    analysis::analyze(&legs, state.config.premium_basis)
}

/// GET /health -- liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<CountersSnapshot> {
    Json(state.counters.snapshot())
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::server::router;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(AppConfig::default()))
    }

    fn contract(kind: &str, position: &str, strike: f64, bid: f64, ask: f64) -> Value {
        json!({
            "type": kind,
            "long_short": position,
            "strike_price": strike,
            "bid": bid,
            "ask": ask,
            "expiration_date": "2099-12-17T00:00:00Z",
        })
    }

    async fn post_analyze(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_single_long_call() {
        let body = json!([contract("Call", "long", 100.0, 10.0, 12.0)]).to_string();
        let (status, v) = post_analyze(app(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!v["risk_reward_graph"].as_array().unwrap().is_empty());
        assert_eq!(v["max_profit"], "+Inf");
        assert_eq!(v["max_loss"], "-1200.00");
        assert_eq!(v["break_even_points"], json!([112.0]));
    }

    #[tokio::test]
    async fn test_two_leg_strategy() {
        let body = json!([
            contract("Call", "long", 100.0, 10.0, 12.0),
            contract("Put", "short", 95.0, 7.0, 9.0),
        ])
        .to_string();
        let (status, v) = post_analyze(app(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["max_profit"], "+Inf");
        assert_eq!(v["max_loss"], "-Inf");
        assert_eq!(v["break_even_points"], json!([105.0]));
    }

    #[tokio::test]
    async fn test_too_many_contracts() {
        let c = contract("Call", "long", 100.0, 10.0, 12.0);
        let body = json!([c.clone(), c.clone(), c.clone(), c.clone(), c]).to_string();
        let (status, v) = post_analyze(app(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "only accepting at most 4 options contracts");
    }

    #[tokio::test]
    async fn test_no_contracts() {
        let (status, v) = post_analyze(app(), "[]".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "need at least one options contracts");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let (status, v) = post_analyze(app(), "{ invalid json }".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!v["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_field() {
        let body = json!([{ "type": "Call", "long_short": "long", "strike_price": 100.0 }]).to_string();
        let (status, v) = post_analyze(app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(v["error"].as_str().unwrap().contains("bid"), "got {v}");
    }

    #[tokio::test]
    async fn test_field_validation() {
        let body = json!([contract("Put", "long", 0.0, 1.0, 1.0)]).to_string();
        let (status, v) = post_analyze(app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "strike price must be greater than zero");

        let mut expired = contract("Put", "long", 90.0, 1.0, 1.0);
        expired["expiration_date"] = json!("2001-01-01T00:00:00Z");
        let (status, v) = post_analyze(app(), json!([expired]).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "expiration date must be in the future");
    }

    #[tokio::test]
    async fn test_counters_track_outcomes() {
        let app = app();

        let good = json!([contract("Put", "long", 90.0, 8.0, 10.0)]).to_string();
        let (status, _) = post_analyze(app.clone(), good).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = post_analyze(app.clone(), "[]".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(Request::builder().uri("/api/counters").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(v["requests_received"], 2);
        assert_eq!(v["analyses_completed"], 1);
        assert_eq!(v["requests_rejected"], 1);
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_is_post_only() {
        let response = app()
            .oneshot(Request::builder().uri("/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
