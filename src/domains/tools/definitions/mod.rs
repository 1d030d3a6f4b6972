//! Tool definitions, grouped by resource.

pub mod card;

pub use card::{
    AddCommentTool, CreateCardTool, DeleteCardTool, GetCardCommentsTool, GetCardTool,
    GetCardsTool, UpdateCardTool,
};
