pub mod cost_analysis;
pub mod solar_input;
