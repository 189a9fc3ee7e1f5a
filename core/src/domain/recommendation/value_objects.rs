#[derive(Debug, Clone)]
pub struct GenerateTextInput {
    pub prompt: String,
}
