//! Trello domain module.
//!
//! Everything needed to talk to the Trello REST API:
//!
//! - `models.rs` - typed entities decoded from the wire format
//! - `client.rs` - the authenticated HTTP capability (trait + reqwest impl)
//! - `service.rs` - card operations, including the concurrent comment fan-out
//! - `error.rs` - domain error taxonomy

pub mod client;
mod error;
pub mod models;
pub mod service;

pub use client::{ApiError, TrelloClient, TrelloHttpClient};
pub use error::{TrelloError, TrelloResult};
pub use models::{
    TrelloBoard, TrelloCard, TrelloComment, TrelloCommentData, TrelloLabel, TrelloList,
    TrelloMemberCreator,
};
pub use service::{CardService, CreateCardParams, UpdateCardParams};
