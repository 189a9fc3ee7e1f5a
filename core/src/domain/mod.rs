pub mod common;
pub mod inventory;
pub mod llm;
pub mod recommendation;
