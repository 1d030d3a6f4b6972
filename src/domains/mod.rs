//! Domains module containing business logic organized by bounded contexts.

pub mod tools;
pub mod trello;
