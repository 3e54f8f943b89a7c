//! Command implementations

pub mod catalog;
pub mod operation;
pub mod profile;
