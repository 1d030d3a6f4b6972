//! Trello card tools.
//!
//! One file per tool. Each tool is a thin adapter over
//! [`CardService`](crate::domains::trello::CardService): it logs intent,
//! calls the service, logs the outcome, and turns failures into error
//! results without swallowing them.

mod add_comment;
mod common;
mod create_card;
mod delete_card;
mod get_card;
mod get_cards;
mod get_comments;
mod update_card;

pub use add_comment::{AddCommentParams, AddCommentTool};
pub use create_card::CreateCardTool;
pub use delete_card::{DeleteCardParams, DeleteCardTool};
pub use get_card::{GetCardParams, GetCardTool};
pub use get_cards::{GetCardsParams, GetCardsTool};
pub use get_comments::{GetCardCommentsParams, GetCardCommentsTool};
pub use update_card::{UpdateCardTool, UpdateCardToolParams};
