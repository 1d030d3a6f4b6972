//! Card service - orchestrates Trello card CRUD and the nested comment
//! fetches.
//!
//! Every operation is a stateless pass-through to the REST API: entities are
//! rebuilt from the remote response on every call, and failures from the
//! client propagate unchanged (no retries, no fallback values). The one piece
//! of coordination lives in [`CardService::get_cards`], which fans out the
//! per-card comment fetches through a bounded concurrent pipeline.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::debug;

use super::client::TrelloClient;
use super::error::{TrelloError, TrelloResult};
use super::models::{TrelloCard, TrelloComment};

/// Cap on in-flight comment fetches during a `get_cards` fan-out, so a large
/// list cannot open an unbounded number of simultaneous requests.
pub const MAX_CONCURRENT_COMMENT_FETCHES: usize = 8;

/// Fields accepted when creating a card. Field names match the Trello wire
/// format; anything Trello adds in the future can be passed through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardParams {
    /// ID of the list the card is created in.
    #[schemars(description = "ID of the list to create the card in")]
    pub id_list: String,

    /// Name of the new card.
    #[schemars(description = "Name of the new card")]
    pub name: String,

    #[schemars(description = "Description of the new card")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[schemars(description = "Due timestamp (ISO 8601 string)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,

    #[schemars(description = "Position of the card in the list")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<f64>,

    /// Unrecognized fields, forwarded to Trello verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Partial update for a card. Fields left as `None` are not sent, so Trello
/// keeps their current values; there is no local merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardParams {
    #[schemars(description = "New name for the card")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[schemars(description = "New description for the card")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[schemars(description = "Whether the card is archived")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    #[schemars(description = "ID of the list to move the card to")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_list: Option<String>,

    #[schemars(description = "Due timestamp (ISO 8601 string)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,

    #[schemars(description = "New position of the card in its list")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<f64>,

    /// Unrecognized fields, forwarded to Trello verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Service for managing Trello cards.
pub struct CardService {
    client: Arc<dyn TrelloClient>,
}

impl CardService {
    pub fn new(client: Arc<dyn TrelloClient>) -> Self {
        Self { client }
    }

    /// Retrieve a card by ID, with its comments attached.
    pub async fn get_card(&self, card_id: &str) -> TrelloResult<TrelloCard> {
        let response = self.client.get(&format!("/cards/{card_id}"), &[]).await?;
        let mut card: TrelloCard = decode("card", response)?;
        card.comments = self.get_card_comments(card_id).await?;
        Ok(card)
    }

    /// Retrieve all cards in a list, each with its comments attached.
    ///
    /// Cards come back in the order Trello reports them. Comment fetches run
    /// concurrently (at most [`MAX_CONCURRENT_COMMENT_FETCHES`] in flight)
    /// and are zipped back to their cards by index, so the pairing does not
    /// depend on completion order. If any single fetch fails the whole call
    /// fails and the remaining in-flight fetches are dropped.
    pub async fn get_cards(&self, list_id: &str) -> TrelloResult<Vec<TrelloCard>> {
        let response = self
            .client
            .get(&format!("/lists/{list_id}/cards"), &[])
            .await?;
        let mut cards: Vec<TrelloCard> = decode("card list", response)?;

        let ids: Vec<String> = cards.iter().map(|card| card.id.clone()).collect();
        let comments: Vec<Vec<TrelloComment>> = stream::iter(ids)
            .map(|id| async move { self.get_card_comments(&id).await })
            .buffered(MAX_CONCURRENT_COMMENT_FETCHES)
            .try_collect()
            .await?;

        debug!(
            "Attached comments to {} card(s) from list {}",
            cards.len(),
            list_id
        );
        for (card, comments) in cards.iter_mut().zip(comments) {
            card.comments = comments;
        }
        Ok(cards)
    }

    /// Create a new card. Comments are not fetched; a new card has none.
    pub async fn create_card(&self, params: &CreateCardParams) -> TrelloResult<TrelloCard> {
        let data = serde_json::to_value(params)
            .map_err(|e| TrelloError::validation(format!("card fields: {e}")))?;
        let response = self.client.post("/cards", &data).await?;
        decode("card", response)
    }

    /// Update a card in place and return Trello's post-update representation.
    pub async fn update_card(
        &self,
        card_id: &str,
        params: &UpdateCardParams,
    ) -> TrelloResult<TrelloCard> {
        let data = serde_json::to_value(params)
            .map_err(|e| TrelloError::validation(format!("card fields: {e}")))?;
        let response = self.client.put(&format!("/cards/{card_id}"), &data).await?;
        decode("card", response)
    }

    /// Delete a card, returning Trello's acknowledgement payload unparsed.
    pub async fn delete_card(&self, card_id: &str) -> TrelloResult<Value> {
        Ok(self.client.delete(&format!("/cards/{card_id}")).await?)
    }

    /// Retrieve all comments for a card, in the order Trello reports them
    /// (typically newest first; not re-sorted locally).
    pub async fn get_card_comments(&self, card_id: &str) -> TrelloResult<Vec<TrelloComment>> {
        let response = self
            .client
            .get(
                &format!("/cards/{card_id}/actions"),
                &[("filter", "commentCard")],
            )
            .await?;
        decode("comment list", response)
    }

    /// Add a comment to a card. The text is passed through as-is; Trello
    /// decides whether to accept it.
    pub async fn add_comment_to_card(
        &self,
        card_id: &str,
        text: &str,
    ) -> TrelloResult<TrelloComment> {
        let response = self
            .client
            .post(
                &format!("/cards/{card_id}/actions/comments"),
                &json!({ "text": text }),
            )
            .await?;
        decode("comment", response)
    }
}

fn decode<T: DeserializeOwned>(what: &str, value: Value) -> TrelloResult<T> {
    serde_json::from_value(value)
        .map_err(|e| TrelloError::validation(format!("{what}: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::domains::trello::client::ApiError;

    /// In-memory stand-in for the Trello API. Responses are keyed by
    /// `"METHOD path"`; unknown paths answer 404. Optionally delays GETs to
    /// shuffle completion order, and tracks the peak number of in-flight
    /// requests.
    #[derive(Default)]
    struct MockClient {
        responses: Mutex<HashMap<String, Value>>,
        delays_ms: Mutex<HashMap<String, u64>>,
        calls: Mutex<Vec<(String, String, Value)>>,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
    }

    impl MockClient {
        fn with_response(self, method: &str, path: &str, value: Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(format!("{method} {path}"), value);
            self
        }

        fn with_delay(self, method: &str, path: &str, millis: u64) -> Self {
            self.delays_ms
                .lock()
                .unwrap()
                .insert(format!("{method} {path}"), millis);
            self
        }

        fn calls(&self) -> Vec<(String, String, Value)> {
            self.calls.lock().unwrap().clone()
        }

        async fn respond(&self, method: &str, path: &str, data: Value) -> Result<Value, ApiError> {
            let key = format!("{method} {path}");

            let entered = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(entered, Ordering::SeqCst);

            let delay = self.delays_ms.lock().unwrap().get(&key).copied();
            if let Some(millis) = delay {
                tokio::time::sleep(Duration::from_millis(millis)).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.calls
                .lock()
                .unwrap()
                .push((method.to_string(), path.to_string(), data));

            match self.responses.lock().unwrap().get(&key) {
                Some(value) => Ok(value.clone()),
                None => Err(ApiError::NotFound {
                    path: path.to_string(),
                }),
            }
        }
    }

    #[async_trait]
    impl TrelloClient for MockClient {
        async fn get(&self, path: &str, _params: &[(&str, &str)]) -> Result<Value, ApiError> {
            self.respond("GET", path, Value::Null).await
        }

        async fn post(&self, path: &str, data: &Value) -> Result<Value, ApiError> {
            self.respond("POST", path, data.clone()).await
        }

        async fn put(&self, path: &str, data: &Value) -> Result<Value, ApiError> {
            self.respond("PUT", path, data.clone()).await
        }

        async fn delete(&self, path: &str) -> Result<Value, ApiError> {
            self.respond("DELETE", path, Value::Null).await
        }
    }

    fn card_json(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "idList": "list1",
            "idBoard": "board1",
            "url": format!("https://trello.com/c/{id}"),
            "pos": 1.0
        })
    }

    fn comment_json(id: &str, text: &str) -> Value {
        json!({
            "id": id,
            "data": {"text": text},
            "date": "2026-08-30T09:00:00.000Z",
            "memberCreator": {"id": "mem1", "fullName": "Ada Lovelace", "username": "ada"}
        })
    }

    fn service(mock: MockClient) -> (Arc<MockClient>, CardService) {
        let client = Arc::new(mock);
        (client.clone(), CardService::new(client))
    }

    #[tokio::test]
    async fn get_card_attaches_comments() {
        let (_, service) = service(
            MockClient::default()
                .with_response("GET", "/cards/c1", card_json("c1", "One"))
                .with_response(
                    "GET",
                    "/cards/c1/actions",
                    json!([comment_json("a1", "first"), comment_json("a2", "second")]),
                ),
        );

        let card = service.get_card("c1").await.unwrap();
        assert_eq!(card.id, "c1");
        assert_eq!(card.comments.len(), 2);
        assert_eq!(card.comments[0].data.text, "first");

        // Same comments as an independent get_card_comments call.
        let comments = service.get_card_comments("c1").await.unwrap();
        assert_eq!(card.comments, comments);
    }

    #[tokio::test]
    async fn get_card_missing_is_not_found() {
        let (_, service) = service(MockClient::default());
        let err = service.get_card("nope").await.unwrap_err();
        assert!(matches!(err, TrelloError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_cards_zips_comments_by_index_not_completion_order() {
        // The first card's comment fetch finishes last; its comments must
        // still land on the first card.
        let (_, service) = service(
            MockClient::default()
                .with_response(
                    "GET",
                    "/lists/list1/cards",
                    json!([card_json("c1", "One"), card_json("c2", "Two"), card_json("c3", "Three")]),
                )
                .with_response("GET", "/cards/c1/actions", json!([comment_json("a1", "on c1")]))
                .with_delay("GET", "/cards/c1/actions", 30)
                .with_response("GET", "/cards/c2/actions", json!([comment_json("a2", "on c2")]))
                .with_delay("GET", "/cards/c2/actions", 10)
                .with_response("GET", "/cards/c3/actions", json!([])),
        );

        let cards = service.get_cards("list1").await.unwrap();
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);
        assert_eq!(cards[0].comments[0].data.text, "on c1");
        assert_eq!(cards[1].comments[0].data.text, "on c2");
        assert!(cards[2].comments.is_empty());
    }

    #[tokio::test]
    async fn get_cards_fails_whole_call_on_single_comment_failure() {
        // No response registered for c2's actions, so that fetch 404s.
        let (_, service) = service(
            MockClient::default()
                .with_response(
                    "GET",
                    "/lists/list1/cards",
                    json!([card_json("c1", "One"), card_json("c2", "Two")]),
                )
                .with_response("GET", "/cards/c1/actions", json!([])),
        );

        assert!(service.get_cards("list1").await.is_err());
    }

    #[tokio::test]
    async fn get_cards_bounds_concurrent_comment_fetches() {
        let cards: Vec<Value> = (0..20).map(|i| card_json(&format!("c{i}"), "card")).collect();
        let mut mock =
            MockClient::default().with_response("GET", "/lists/list1/cards", json!(cards));
        for i in 0..20 {
            mock = mock
                .with_response("GET", &format!("/cards/c{i}/actions"), json!([]))
                .with_delay("GET", &format!("/cards/c{i}/actions"), 5);
        }
        let (client, service) = service(mock);

        service.get_cards("list1").await.unwrap();
        assert!(client.peak_in_flight.load(Ordering::SeqCst) <= MAX_CONCURRENT_COMMENT_FETCHES);
    }

    #[tokio::test]
    async fn create_card_posts_fields_and_skips_comment_fetch() {
        let (client, service) = service(MockClient::default().with_response(
            "POST",
            "/cards",
            card_json("new1", "X"),
        ));

        let params = CreateCardParams {
            id_list: "list1".to_string(),
            name: "X".to_string(),
            desc: None,
            due: None,
            pos: None,
            extra: serde_json::Map::new(),
        };
        let card = service.create_card(&params).await.unwrap();
        assert_eq!(card.id_list, "list1");
        assert_eq!(card.name, "X");
        assert!(card.comments.is_empty());

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2, json!({"idList": "list1", "name": "X"}));
    }

    #[tokio::test]
    async fn create_card_forwards_extra_fields() {
        let (client, service) = service(MockClient::default().with_response(
            "POST",
            "/cards",
            card_json("new1", "X"),
        ));

        let mut extra = serde_json::Map::new();
        extra.insert("idMembers".to_string(), json!(["mem1"]));
        let params = CreateCardParams {
            id_list: "list1".to_string(),
            name: "X".to_string(),
            desc: Some("details".to_string()),
            due: None,
            pos: None,
            extra,
        };
        service.create_card(&params).await.unwrap();

        let body = &client.calls()[0].2;
        assert_eq!(body["idMembers"], json!(["mem1"]));
        assert_eq!(body["desc"], json!("details"));
    }

    #[tokio::test]
    async fn update_card_sends_only_set_fields() {
        let mut updated = card_json("c1", "Y");
        updated["desc"] = json!("kept");
        let (client, service) =
            service(MockClient::default().with_response("PUT", "/cards/c1", updated));

        let params = UpdateCardParams {
            name: Some("Y".to_string()),
            ..Default::default()
        };
        let card = service.update_card("c1", &params).await.unwrap();
        assert_eq!(card.name, "Y");
        // Unspecified fields come back from the remote state, not from the input.
        assert_eq!(card.desc.as_deref(), Some("kept"));

        assert_eq!(client.calls()[0].2, json!({"name": "Y"}));
    }

    #[tokio::test]
    async fn delete_card_passes_ack_through() {
        let (_, service) = service(MockClient::default().with_response(
            "DELETE",
            "/cards/c1",
            json!({"limits": {}}),
        ));

        let ack = service.delete_card("c1").await.unwrap();
        assert_eq!(ack, json!({"limits": {}}));
    }

    #[tokio::test]
    async fn add_comment_posts_text() {
        let (client, service) = service(MockClient::default().with_response(
            "POST",
            "/cards/c1/actions/comments",
            comment_json("a9", "hello"),
        ));

        let comment = service.add_comment_to_card("c1", "hello").await.unwrap();
        assert_eq!(comment.data.text, "hello");
        assert_eq!(client.calls()[0].2, json!({"text": "hello"}));
    }

    #[tokio::test]
    async fn malformed_card_payload_is_validation_error() {
        let (_, service) = service(MockClient::default().with_response(
            "GET",
            "/cards/c1",
            json!({"id": "c1", "name": "broken"}),
        ));

        let err = service.get_card("c1").await.unwrap_err();
        assert!(matches!(err, TrelloError::Validation(msg) if msg.contains("idList")));
    }
}
