//! Typed Trello entities.
//!
//! These structs mirror Trello's camelCase wire format. Decoding rejects
//! payloads with missing required fields; optional fields fall back to their
//! documented defaults. No entity performs any I/O - the service layer is
//! responsible for fetching and for attaching `comments` to cards.

use serde::{Deserialize, Serialize};

/// A Trello board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloBoard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub id_organization: Option<String>,
    pub url: String,
}

/// A list (column) on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    pub id_board: String,
    /// Ordering key assigned by Trello. Opaque; never renumbered locally.
    pub pos: f64,
}

/// A label attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloLabel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A card, optionally with its comments attached.
///
/// `comments` is not part of the wire shape of a card GET: Trello reports
/// comments as separate "actions", so raw decode always yields an empty
/// vector and [`CardService`](super::service::CardService) fills it in with
/// a dedicated fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub closed: bool,
    pub id_list: String,
    pub id_board: String,
    pub url: String,
    pub pos: f64,
    /// Labels in the order Trello reports them.
    #[serde(default)]
    pub labels: Vec<TrelloLabel>,
    /// Due timestamp as reported by Trello (ISO-like string, not parsed).
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub comments: Vec<TrelloComment>,
}

/// The text payload nested inside a comment action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrelloCommentData {
    pub text: String,
}

/// The member who created a comment action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloMemberCreator {
    pub id: String,
    pub full_name: String,
    pub username: String,
}

/// A comment on a card (a `commentCard` action in Trello terms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloComment {
    pub id: String,
    pub data: TrelloCommentData,
    /// Creation timestamp as reported by Trello (string, not parsed).
    pub date: String,
    pub member_creator: TrelloMemberCreator,
}
