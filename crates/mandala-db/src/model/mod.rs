pub mod admin;
pub mod confirmation;
pub mod contact;
pub mod content;
pub mod gallery;
