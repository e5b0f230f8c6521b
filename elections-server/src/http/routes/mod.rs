//! Route handlers organized by resource

pub mod divisions;
pub mod health;
