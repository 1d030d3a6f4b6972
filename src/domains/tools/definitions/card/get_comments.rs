//! Tool for retrieving the comments on a Trello card.

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
pub struct GetCardCommentsParams {
    #[schemars(description = "ID of the card to get comments for")]
    pub card_id: String,
}

pub struct GetCardCommentsTool;

impl GetCardCommentsTool {
    pub const NAME: &'static str = "get_card_comments";

    pub const DESCRIPTION: &'static str =
        "Retrieve all comments on a Trello card, in the order Trello reports them \
         (typically newest first).";

    pub async fn execute(
        service: &CardService,
        params: &GetCardCommentsParams,
    ) -> CallToolResult {
        info!("Getting comments for card: {}", params.card_id);
        match service.get_card_comments(&params.card_id).await {
            Ok(comments) => {
                info!(
                    "Successfully retrieved {} comment(s) for card: {}",
                    comments.len(),
                    params.card_id
                );
                entity_result(&comments)
            }
            Err(e) => error_result(&format!("Failed to get comments: {e}")),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCardCommentsParams>(),
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
                let params: GetCardCommentsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&service, &params).await)
            }
            .boxed()
        })
    }
}
