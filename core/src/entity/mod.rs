pub mod items;
pub mod recommendations;
