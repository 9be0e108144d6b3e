//! CLI commands

pub mod completion;
pub mod fill;
pub mod inspect;
pub mod validate;
