use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChatTurnDto {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ChatRequestDto {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurnDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChatResponseDto {
    pub reply: String,
}
