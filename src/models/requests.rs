use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for a sizing recommendation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(length(max = 2000, message = "Query must be at most 2000 characters"))]
    #[serde(default)]
    pub text: String,
}
