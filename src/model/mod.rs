//! Wire-level data transfer objects.
//!
//! These types define the JSON bodies exchanged with the web client. Field names are
//! camelCase to match what the single-page frontend sends and expects. Server-side domain
//! models live in `server::model` and convert into these DTOs at the controller boundary.

pub mod api;
pub mod category;
pub mod chat;
pub mod contact;
pub mod event;
pub mod location;
pub mod user;
