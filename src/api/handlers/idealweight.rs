use axum::{
    extract::Query,
    response::Json,
};
use crate::{IdealWeightQuery, IdealWeightResponse,
    api::handlers::common::{format_fixed, parse_decimal},
    formulas};
use tracing::debug;

pub async fn get_ideal_weight(
    Query(params): Query<IdealWeightQuery>,
) -> Json<IdealWeightResponse> {
    let height = parse_decimal(params.height.as_deref());

    let ideal_weight = formulas::ideal_weight(height);
    debug!("Computed ideal weight {} for height={}", ideal_weight, height);

    Json(IdealWeightResponse {
        ideal_weight: format_fixed(ideal_weight),
    })
}
