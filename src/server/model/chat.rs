//! Chat assistant parameters.

use crate::{
    model::chat::{ChatRequestDto, ChatRole},
    server::{error::AppError, util::validate},
};

pub const MAX_MESSAGE_CHARS: usize = 2000;
/// Prior turns forwarded to the model; older turns are dropped.
pub const MAX_HISTORY_TURNS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatParams {
    pub message: String,
    /// Oldest first, at most `MAX_HISTORY_TURNS` entries.
    pub history: Vec<ChatTurn>,
}

impl ChatParams {
    pub fn from_dto(dto: ChatRequestDto) -> Result<Self, AppError> {
        let message = validate::text("Message", &dto.message, 1, MAX_MESSAGE_CHARS)?;

        let mut history: Vec<ChatTurn> = dto
            .history
            .into_iter()
            .filter(|turn| !turn.content.trim().is_empty())
            .map(|turn| ChatTurn {
                role: turn.role,
                content: turn.content.chars().take(MAX_MESSAGE_CHARS).collect(),
            })
            .collect();
        let overflow = history.len().saturating_sub(MAX_HISTORY_TURNS);
        history.drain(..overflow);

        Ok(Self { message, history })
    }
}
