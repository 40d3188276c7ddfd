use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Taxonomy axis a category belongs to.
///
/// Serialized as `genre`, `setting` or `eventType` on the wire and stored as `genre`,
/// `setting` or `event_type` in the database.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKind {
    Genre,
    Setting,
    EventType,
}

impl CategoryKind {
    /// Database representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Setting => "setting",
            Self::EventType => "event_type",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts both the database spelling and the wire spelling.
impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genre" => Ok(Self::Genre),
            "setting" => Ok(Self::Setting),
            "event_type" | "eventType" => Ok(Self::EventType),
            other => Err(format!("Unknown category kind '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub kind: CategoryKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    pub name: String,
    pub kind: CategoryKind,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    pub name: String,
}
