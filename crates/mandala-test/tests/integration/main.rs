//! End-to-end HTTP scenarios against the full `/api` router.

mod helpers;

mod catalog;
mod contact;
mod gallery;
mod health;
mod submissions;
