//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit tests
//! of conversion and rendering logic that only needs entity models in memory.

pub mod event;
