use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use pair_insight::report::views::{CompetitorReportView, PolicyReportView};
use pair_insight::report::{assemble_competitor, assemble_policy};
use pair_insight::resources::{resource_groups, ResourceGroup};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Raw analysis payload plus an optional display-language code.
#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) payload: Value,
    #[serde(default)]
    pub(crate) language: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResourcesViewResponse {
    pub(crate) groups: Vec<ResourceGroup>,
}

pub(crate) fn app_router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/report/policy",
            axum::routing::post(policy_report_endpoint),
        )
        .route(
            "/api/v1/report/competitor",
            axum::routing::post(competitor_report_endpoint),
        )
        .route(
            "/api/v1/resources/view",
            axum::routing::post(resources_view_endpoint),
        )
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

pub(crate) async fn policy_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<ReportRequest>,
) -> Json<PolicyReportView> {
    let language = state.request_language(request.language.as_deref());
    Json(assemble_policy(&request.payload, language))
}

pub(crate) async fn competitor_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<ReportRequest>,
) -> Json<CompetitorReportView> {
    let language = state.request_language(request.language.as_deref());
    Json(assemble_competitor(&request.payload, language))
}

pub(crate) async fn resources_view_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<ReportRequest>,
) -> Json<ResourcesViewResponse> {
    let language = state.request_language(request.language.as_deref());
    Json(ResourcesViewResponse {
        groups: resource_groups(&request.payload, language),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use pair_insight::i18n::Language;
    use serde_json::json;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(recorder.handle()),
            default_language: Language::En,
        }
    }

    #[tokio::test]
    async fn router_serves_health_and_readiness() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let app = app_router().layer(Extension(test_state()));

        let health = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let ready = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ready.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn policy_report_endpoint_assembles_view() {
        let request = ReportRequest {
            payload: json!({
                "policy_metadata": {"policy_name": "CGTMSE Revised Guidelines 2024"},
                "risk_score": {"overall_score": 61.0},
            }),
            language: None,
        };

        let Json(view) = policy_report_endpoint(Extension(test_state()), Json(request)).await;
        assert_eq!(
            view.metadata.expect("metadata").policy_name.as_deref(),
            Some("CGTMSE Revised Guidelines 2024")
        );
        assert_eq!(view.score_cards[0].score, 61);
    }

    #[tokio::test]
    async fn competitor_report_endpoint_honors_language() {
        let request = ReportRequest {
            payload: json!({"recommendations": [{"action": "X", "priority": "LOW"}]}),
            language: Some("hi".to_string()),
        };

        let Json(view) = competitor_report_endpoint(Extension(test_state()), Json(request)).await;
        assert_eq!(view.language, Language::Hi);
        assert_eq!(view.priority_chart.counts.low, 1);
    }

    #[tokio::test]
    async fn resources_view_endpoint_groups_entries() {
        let request = ReportRequest {
            payload: json!({"resources": {
                "government_portals": [{"name": "Udyam", "url": "https://udyamregistration.gov.in/"}],
            }}),
            language: None,
        };

        let Json(response) = resources_view_endpoint(Extension(test_state()), Json(request)).await;
        assert_eq!(response.groups.len(), 1);
        assert_eq!(response.groups[0].label, "Government Portals");
    }
}
