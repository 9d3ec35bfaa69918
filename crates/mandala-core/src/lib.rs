//! Configuration, route constants and error types shared by every mandala crate.

pub mod config;
pub mod constants;
pub mod error;
