//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Request payloads are validated while converting into parameter types, so the service
//! and data layers only ever see well-formed input.

pub mod category;
pub mod chat;
pub mod contact;
pub mod event;
pub mod user;
