pub mod db;
pub mod inventory;
pub mod llm;
pub mod recommendation;
