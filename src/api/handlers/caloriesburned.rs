use axum::{
    extract::Query,
    response::Json,
};
use crate::{CaloriesBurnedQuery, CaloriesBurnedResponse,
    api::handlers::common::{format_fixed, parse_decimal},
    formulas};
use tracing::debug;

pub async fn get_calories_burned(
    Query(params): Query<CaloriesBurnedQuery>,
) -> Json<CaloriesBurnedResponse> {
    let weight = parse_decimal(params.weight.as_deref());
    let duration = parse_decimal(params.duration.as_deref());
    let met = parse_decimal(params.met.as_deref());

    let calories_burned = formulas::calories_burned(weight, duration, met);
    debug!(
        "Computed calories burned {} for weight={} duration={} met={}",
        calories_burned, weight, duration, met
    );

    Json(CaloriesBurnedResponse {
        calories_burned: format_fixed(calories_burned),
    })
}
