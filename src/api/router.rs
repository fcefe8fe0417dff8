//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/v1/`.
//!
//! Middleware stack (outermost → innermost): Extension → CORS → rate limiter.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::config::Settings;
use crate::state::ServiceState;

/// Build the API router. All routes share one rate limiter.
///
/// Middleware uses `Extension<ApiContext>` (injected as the outermost
/// layer) so the rate limiter runs before any handler.
pub fn api_router(service: Arc<ServiceState>, settings: &Settings) -> Router {
    build_router(ApiContext::new(service, settings), settings)
}

fn build_router(ctx: ApiContext, settings: &Settings) -> Router {
    let routes = Router::new()
        .route("/predict", post(endpoints::predict::predict))
        .route("/symptoms", get(endpoints::symptoms::list_symptoms))
        .route("/conditions", get(endpoints::conditions::list_conditions))
        .route("/health", get(endpoints::health::health))
        // Layers apply bottom-up: Extension must be outermost so the
        // rate-limit middleware can extract ApiContext.
        .layer(axum::middleware::from_fn(middleware::rate_limit))
        .layer(cors_layer(&settings.allowed_origins))
        .layer(axum::Extension(ctx));

    Router::new().nest("/api/v1", routes)
}

/// CORS policy from configuration. An empty origin list means any origin
/// — the service exposes no credentials, so this stays safe for local
/// and embedded deployments.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any);

    if allowed_origins.is_empty() {
        base.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        base.allow_origin(AllowOrigin::list(origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::classifier::Classifier;
    use crate::enhancer::{AiEnhancer, MockGenerateClient};
    use crate::enrichment::{EnrichmentRepository, ReferenceTables};
    use crate::inference::InferenceEngine;
    use crate::registry::ConditionRegistry;
    use crate::vocabulary::SymptomVocabulary;

    struct FixedClassifier(usize);

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &[f64]) -> usize {
            self.0
        }
        fn kind(&self) -> &'static str {
            "fixed"
        }
    }

    fn test_service(enhancer: AiEnhancer) -> Arc<ServiceState> {
        let engine = InferenceEngine::new(
            SymptomVocabulary::new(),
            ConditionRegistry::new(),
            Box::new(FixedClassifier(30)),
        );
        let repository = EnrichmentRepository::new(Arc::new(ReferenceTables::default()));
        Arc::new(ServiceState::with_parts(engine, repository, enhancer))
    }

    fn test_app(enhancer: AiEnhancer) -> Router {
        api_router(test_service(enhancer), &Settings::from_env())
    }

    fn predict_request(symptoms: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/predict")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "symptoms": symptoms }).to_string(),
            ))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_component_modes() {
        let app = test_app(AiEnhancer::disabled());
        let req = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["classifier"], "fixed");
        assert_eq!(json["ai_enhancement"], "disabled");
    }

    #[tokio::test]
    async fn predict_known_symptoms_returns_enriched_prediction() {
        let app = test_app(AiEnhancer::disabled());
        let response = app
            .oneshot(predict_request("high fever, headache"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["condition"], "Migraine");
        assert!((json["confidence"].as_f64().unwrap() - 0.8).abs() < 1e-9);
        assert_eq!(json["source"], "ML");
        assert!(json["description"].is_string());
        assert!(json["precautions"].is_array());
        assert_eq!(json["severity"], "Moderate");
    }

    #[tokio::test]
    async fn predict_with_enhancer_tags_ml_ai() {
        let app = test_app(AiEnhancer::enabled(Box::new(MockGenerateClient::respond(
            r#"{"severity":"Severe","description":"AI description"}"#,
        ))));
        let response = app.oneshot(predict_request("headache")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["source"], "ML+AI");
        assert_eq!(json["severity"], "Severe");
        assert_eq!(json["description"], "AI description");
    }

    #[tokio::test]
    async fn predict_empty_input_returns_400() {
        let app = test_app(AiEnhancer::disabled());
        let response = app.oneshot(predict_request("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn predict_placeholder_input_returns_400() {
        let app = test_app(AiEnhancer::disabled());
        let response = app.oneshot(predict_request("symptoms")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn predict_unrecognized_symptoms_returns_400_with_message() {
        let app = test_app(AiEnhancer::disabled());
        let response = app
            .oneshot(predict_request("flibber, gibberish"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            endpoints::predict::NO_MATCH_MESSAGE
        );
    }

    #[tokio::test]
    async fn predict_rejects_malformed_body() {
        let app = test_app(AiEnhancer::disabled());
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/predict")
            .header("content-type", "application/json")
            .body(Body::from("{\"wrong\":true}"))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn symptoms_listing_is_complete_and_sorted() {
        let app = test_app(AiEnhancer::disabled());
        let req = Request::builder()
            .uri("/api/v1/symptoms")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["count"], 132);
        let names: Vec<&str> = json["symptoms"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn conditions_listing_is_complete() {
        let app = test_app(AiEnhancer::disabled());
        let req = Request::builder()
            .uri("/api/v1/conditions")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["count"], 41);
    }

    #[tokio::test]
    async fn rate_limit_rejects_over_quota() {
        let settings = Settings {
            rate_quota: 1,
            ..Settings::from_env()
        };
        let app = api_router(test_service(AiEnhancer::disabled()), &settings);

        let req = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let first = app.clone().oneshot(req).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let req = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let second = app.oneshot(req).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(second.headers().get("Retry-After").unwrap(), "60");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_app(AiEnhancer::disabled());
        let req = Request::builder()
            .uri("/api/v1/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
