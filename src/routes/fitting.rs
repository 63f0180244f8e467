use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{RecommendationEngine, RecommendationError};
use crate::core::recommender::UNEXPECTED_ERROR_MESSAGE;
use crate::models::{ErrorResponse, HealthResponse, RecommendationRequest};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
}

/// Configure all fitting routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/bra-fitting", web::post().to(get_fitting_recommendation));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profiles: state.engine.profiles().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Fitting recommendation endpoint
///
/// POST /api/bra-fitting
///
/// Request body:
/// ```json
/// { "text": "32 underbust, 36 overbust and the band rides up" }
/// ```
async fn get_fitting_recommendation(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for bra-fitting request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(errors.to_string()));
    }

    tracing::debug!("Recommendation request ({} chars)", req.text.len());

    match state.engine.recommend(&req.text) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(RecommendationError::Validation(message)) => {
            tracing::info!("Rejected bra-fitting request: {}", message);
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        Err(e @ RecommendationError::Unexpected(_)) => {
            tracing::error!("Failed to build recommendation: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(UNEXPECTED_ERROR_MESSAGE))
        }
    }
}
