//! Admin authentication.
//!
//! ## Module Organization
//!
//! - `admin`: login and first-admin registration
//! - `password`: password hashing and verification with Argon2
//! - `token`: signed, time-limited admin session tokens

pub mod admin;
pub mod password;
pub mod token;

pub use admin::{Credentials, Session, login, register};
pub use token::{AuthenticatedAdmin, Claims, TokenKeys};
