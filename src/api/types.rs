use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Query values are kept as raw text so that a missing or malformed
/// parameter can fall through to the NaN sentinel instead of rejecting
/// the request.
#[derive(Debug, Deserialize)]
pub struct BmiQuery {
    pub weight: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: String,
}

#[derive(Debug, Deserialize)]
pub struct BodyFatQuery {
    pub height: Option<String>,
    pub neck: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BodyFatResponse {
    #[serde(rename = "bodyFat")]
    pub body_fat: String,
}

#[derive(Debug, Deserialize)]
pub struct IdealWeightQuery {
    pub height: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IdealWeightResponse {
    #[serde(rename = "idealWeight")]
    pub ideal_weight: String,
}

#[derive(Debug, Deserialize)]
pub struct CaloriesBurnedQuery {
    pub weight: Option<String>,
    pub duration: Option<String>,
    pub met: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CaloriesBurnedResponse {
    #[serde(rename = "caloriesBurned")]
    pub calories_burned: String,
}
