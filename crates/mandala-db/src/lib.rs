//! Persistence for the mandala content catalog: schema, row models and the
//! storage traits with their `PostgreSQL` and in-memory backends.

pub mod db;
pub mod error;
pub mod model;
pub mod store;
