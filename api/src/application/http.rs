pub mod meal_recommendation;
pub mod server;
