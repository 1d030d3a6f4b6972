//! Tool for updating an existing Trello card.

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

use crate::domains::trello::{CardService, UpdateCardParams};

use super::common::{entity_result, error_result};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateCardToolParams {
    #[schemars(description = "ID of the card to update")]
    pub card_id: String,

    /// Fields to change; anything omitted keeps its current value on Trello.
    #[serde(flatten)]
    pub fields: UpdateCardParams,
}

pub struct UpdateCardTool;

impl UpdateCardTool {
    pub const NAME: &'static str = "update_card";

    pub const DESCRIPTION: &'static str =
        "Update a Trello card's attributes (name, description, list, due date, position, \
         archived state). Only the provided fields are changed; Trello keeps the rest.";

    pub async fn execute(service: &CardService, params: &UpdateCardToolParams) -> CallToolResult {
        info!("Updating card: {}", params.card_id);
        match service.update_card(&params.card_id, &params.fields).await {
            Ok(card) => {
                info!("Successfully updated card: {}", card.id);
                entity_result(&card)
            }
            Err(e) => error_result(&format!("Failed to update card: {e}")),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateCardToolParams>(),
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
                let params: UpdateCardToolParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&service, &params).await)
            }
            .boxed()
        })
    }
}
