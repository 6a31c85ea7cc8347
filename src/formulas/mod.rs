//! Closed-form health and fitness formulas.
//!
//! Inputs are plain f64 so the NaN sentinel produced by the query layer
//! flows through arithmetic unchanged.

/// Body Mass Index from weight in kilograms and height in centimeters.
///
/// Keeps the cm-squared-over-10000 arithmetic instead of converting to
/// meters first; algebraically identical, preserved for wire parity.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    weight_kg / (height_cm * height_cm / 10000.0)
}

/// U.S. Navy circumference method for body fat percentage.
///
/// All lengths in centimeters. Goes non-finite when
/// `waist + hips - neck <= 0` or `height <= 0`; callers serialize that
/// result rather than rejecting it.
pub fn body_fat(height_cm: f64, neck_cm: f64, waist_cm: f64, hips_cm: f64) -> f64 {
    495.0
        / (1.29579 - 0.35004 * (waist_cm + hips_cm - neck_cm).log10()
            + 0.22100 * height_cm.log10())
        - 450.0
}

/// Devine formula for ideal body weight, height in centimeters.
/// Adult-male variant only; there is no sex parameter.
pub fn ideal_weight(height_cm: f64) -> f64 {
    50.0 + 0.9 * (height_cm - 152.4)
}

/// Calories burned from weight in kilograms, activity duration in
/// minutes, and a MET value.
pub fn calories_burned(weight_kg: f64, duration_min: f64, met: f64) -> f64 {
    weight_kg * met * (duration_min / 60.0)
}
