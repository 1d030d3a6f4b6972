//! Tool for retrieving a single Trello card with its comments.

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
pub struct GetCardParams {
    #[schemars(description = "ID of the card to retrieve")]
    pub card_id: String,
}

pub struct GetCardTool;

impl GetCardTool {
    pub const NAME: &'static str = "get_card";

    pub const DESCRIPTION: &'static str =
        "Retrieve a Trello card by its ID, including its comments.";

    pub async fn execute(service: &CardService, params: &GetCardParams) -> CallToolResult {
        info!("Getting card: {}", params.card_id);
        match service.get_card(&params.card_id).await {
            Ok(card) => {
                info!(
                    "Successfully retrieved card: {} ({} comment(s))",
                    card.id,
                    card.comments.len()
                );
                entity_result(&card)
            }
            Err(e) => error_result(&format!("Failed to get card: {e}")),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCardParams>(),
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
                let params: GetCardParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&service, &params).await)
            }
            .boxed()
        })
    }
}
