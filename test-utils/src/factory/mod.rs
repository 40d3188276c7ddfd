//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let admin = factory::user::create_admin(&db).await?;
//!     let genre = factory::category::create_category(&db, "genre", "Techno").await?;
//!
//!     // Customize through the builder
//!     let event = factory::event::EventFactory::new(&db)
//!         .title("Dune Rave")
//!         .genre("Techno")
//!         .tags(["desert", "camping"])
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `event` - Create event entities together with their tags
//! - `contact_message` - Create contact message entities
//! - `helpers` - Unique id generation shared by all factories

pub mod category;
pub mod contact_message;
pub mod event;
pub mod helpers;
pub mod user;

pub use category::create_category;
pub use contact_message::create_contact_message;
pub use event::create_event;
pub use user::{create_admin, create_user};
