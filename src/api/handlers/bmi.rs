use axum::{
    extract::Query,
    response::Json,
};
use crate::{BmiQuery, BmiResponse,
    api::handlers::common::{format_fixed, parse_decimal},
    formulas};
use tracing::debug;

pub async fn get_bmi(Query(params): Query<BmiQuery>) -> Json<BmiResponse> {
    let weight = parse_decimal(params.weight.as_deref());
    let height = parse_decimal(params.height.as_deref());

    let bmi = formulas::bmi(weight, height);
    debug!("Computed BMI {} for weight={} height={}", bmi, weight, height);

    Json(BmiResponse {
        bmi: format_fixed(bmi),
    })
}
