//! Tool for deleting a Trello card.

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
pub struct DeleteCardParams {
    #[schemars(description = "ID of the card to delete")]
    pub card_id: String,
}

pub struct DeleteCardTool;

impl DeleteCardTool {
    pub const NAME: &'static str = "delete_card";

    pub const DESCRIPTION: &'static str =
        "Delete a Trello card. Returns Trello's acknowledgement payload.";

    pub async fn execute(service: &CardService, params: &DeleteCardParams) -> CallToolResult {
        info!("Deleting card: {}", params.card_id);
        match service.delete_card(&params.card_id).await {
            Ok(ack) => {
                info!("Successfully deleted card: {}", params.card_id);
                entity_result(&ack)
            }
            Err(e) => error_result(&format!("Failed to delete card: {e}")),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteCardParams>(),
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
                let params: DeleteCardParams =
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
    use serde_json::Value;

    use super::*;
    use crate::domains::trello::{ApiError, TrelloClient};

    struct EmptyClient;

    #[async_trait]
    impl TrelloClient for EmptyClient {
        async fn get(&self, path: &str, _params: &[(&str, &str)]) -> Result<Value, ApiError> {
            Err(ApiError::NotFound {
                path: path.to_string(),
            })
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
        let params: DeleteCardParams = serde_json::from_str(r#"{"card_id": "c1"}"#).unwrap();
        assert_eq!(params.card_id, "c1");
    }

    #[tokio::test]
    async fn missing_card_surfaces_as_error_result() {
        let service = CardService::new(Arc::new(EmptyClient));
        let params = DeleteCardParams {
            card_id: "missing".to_string(),
        };
        let result = DeleteCardTool::execute(&service, &params).await;
        assert_eq!(result.is_error, Some(true));
    }
}
