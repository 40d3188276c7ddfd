pub mod auth;
pub mod category;
pub mod chat;
pub mod contact;
pub mod event;
pub mod location;
pub mod user;
