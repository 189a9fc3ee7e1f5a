pub mod generate_text;
pub mod get_recommendations;
