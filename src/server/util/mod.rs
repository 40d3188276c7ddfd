//! Small helpers shared by the model and service layers.

pub mod password;
pub mod validate;
