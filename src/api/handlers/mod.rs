// Submodules
pub mod common;  // Shared parse/format helpers
pub mod health;  // Health check endpoint

// Formula endpoints
pub mod bmi;
pub mod bodyfat;
pub mod idealweight;
pub mod caloriesburned;

// Re-exports
pub use health::health_check;

// Formula endpoints
pub use bmi::get_bmi;
pub use bodyfat::get_body_fat;
pub use idealweight::get_ideal_weight;
pub use caloriesburned::get_calories_burned;
