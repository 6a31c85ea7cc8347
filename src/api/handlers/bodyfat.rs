use axum::{
    extract::Query,
    response::Json,
};
use crate::{BodyFatQuery, BodyFatResponse,
    api::handlers::common::{format_fixed, parse_decimal},
    formulas};
use tracing::debug;

pub async fn get_body_fat(Query(params): Query<BodyFatQuery>) -> Json<BodyFatResponse> {
    let height = parse_decimal(params.height.as_deref());
    let neck = parse_decimal(params.neck.as_deref());
    let waist = parse_decimal(params.waist.as_deref());
    let hips = parse_decimal(params.hips.as_deref());

    // Navy method goes non-finite for degenerate circumferences; the
    // result is serialized as-is rather than rejected.
    let body_fat = formulas::body_fat(height, neck, waist, hips);
    debug!(
        "Computed body fat {} for height={} neck={} waist={} hips={}",
        body_fat, height, neck, waist, hips
    );

    Json(BodyFatResponse {
        body_fat: format_fixed(body_fat),
    })
}
