//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the fetch tools and their dispatcher
//! - **resources**: static resources readable by URI

pub mod resources;
pub mod tools;
