//! Tool for retrieving all cards in a Trello list.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::trello::CardService;

use super::common::{entity_result, error_result};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCardsParams {
    #[schemars(description = "ID of the list whose cards to retrieve")]
    pub list_id: String,
}

pub struct GetCardsTool;

impl GetCardsTool {
    pub const NAME: &'static str = "get_cards";

    pub const DESCRIPTION: &'static str =
        "Retrieve all cards in a Trello list, including each card's comments. \
         Cards are returned in the order Trello reports them.";

    pub async fn execute(service: &CardService, params: &GetCardsParams) -> CallToolResult {
        info!("Getting cards for list: {}", params.list_id);
        match service.get_cards(&params.list_id).await {
            Ok(cards) => {
                info!(
                    "Successfully retrieved {} card(s) for list: {}",
                    cards.len(),
                    params.list_id
                );
                entity_result(&cards)
            }
            Err(e) => error_result(&format!("Failed to get cards: {e}")),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCardsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(service: Arc<CardService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let service = service.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GetCardsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&service, &params).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use futures::future::BoxFuture;
    use serde_json::{Value, json};

    use super::*;
    use crate::domains::trello::{ApiError, TrelloClient};

    struct StubClient;

    #[async_trait]
    impl TrelloClient for StubClient {
        async fn get(&self, path: &str, _params: &[(&str, &str)]) -> Result<Value, ApiError> {
            match path {
                "/lists/list1/cards" => Ok(json!([{
                    "id": "c1",
                    "name": "One",
                    "idList": "list1",
                    "idBoard": "board1",
                    "url": "https://trello.com/c/c1",
                    "pos": 1.0
                }])),
                "/cards/c1/actions" => Ok(json!([])),
                _ => Err(ApiError::NotFound {
                    path: path.to_string(),
                }),
            }
        }

        async fn post(&self, path: &str, _data: &Value) -> Result<Value, ApiError> {
            Err(ApiError::NotFound {
                path: path.to_string(),
            })
        }

        async fn put(&self, path: &str, _data: &Value) -> Result<Value, ApiError> {
            Err(ApiError::NotFound {
                path: path.to_string(),
            })
        }

        async fn delete(&self, path: &str) -> Result<Value, ApiError> {
            Err(ApiError::NotFound {
                path: path.to_string(),
            })
        }
    }

    #[test]
    fn params_deserialize() {
        let params: GetCardsParams = serde_json::from_str(r#"{"list_id": "l1"}"#).unwrap();
        assert_eq!(params.list_id, "l1");
    }

    #[test]
    fn params_reject_missing_list_id() {
        assert!(serde_json::from_str::<GetCardsParams>("{}").is_err());
    }

    // The tool route hands execute's future around as a BoxFuture; the
    // fan-out inside get_cards has to stay general enough for that boxing
    // to type-check.
    #[tokio::test]
    async fn boxed_execute_returns_cards() {
        let service = CardService::new(Arc::new(StubClient));
        let params = GetCardsParams {
            list_id: "list1".to_string(),
        };
        let fut: BoxFuture<'_, CallToolResult> = GetCardsTool::execute(&service, &params).boxed();
        let result = fut.await;
        assert_ne!(result.is_error, Some(true));
    }
}
