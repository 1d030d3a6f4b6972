//! Tool for creating a new Trello card.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::trello::{CardService, CreateCardParams};

use super::common::{entity_result, error_result};

pub struct CreateCardTool;

impl CreateCardTool {
    pub const NAME: &'static str = "create_card";

    pub const DESCRIPTION: &'static str =
        "Create a new card in a Trello list. Requires the target list ID and a name; \
         optionally takes a description, due date and position. Unrecognized fields \
         are forwarded to Trello as-is.";

    pub async fn execute(service: &CardService, params: &CreateCardParams) -> CallToolResult {
        info!("Creating card '{}' in list: {}", params.name, params.id_list);
        match service.create_card(params).await {
            Ok(card) => {
                info!("Successfully created card: {}", card.id);
                entity_result(&card)
            }
            Err(e) => error_result(&format!("Failed to create card: {e}")),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateCardParams>(),
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
                let params: CreateCardParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&service, &params).await)
            }
            .boxed()
        })
    }
}
