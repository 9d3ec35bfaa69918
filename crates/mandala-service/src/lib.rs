//! Business rules for the mandala API: catalog scopes, validation, admin
//! authentication and the contact, confirmation and gallery collections.

pub mod auth;
pub mod catalog;
pub mod confirmation;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod validation;
