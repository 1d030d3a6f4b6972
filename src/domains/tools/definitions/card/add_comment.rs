//! Tool for adding a comment to a Trello card.

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
pub struct AddCommentParams {
    #[schemars(description = "ID of the card to comment on")]
    pub card_id: String,

    #[schemars(description = "Text content of the comment")]
    pub text: String,
}

pub struct AddCommentTool;

impl AddCommentTool {
    pub const NAME: &'static str = "add_comment_to_card";

    pub const DESCRIPTION: &'static str =
        "Add a comment to a Trello card. Returns the created comment.";

    pub async fn execute(service: &CardService, params: &AddCommentParams) -> CallToolResult {
        info!("Adding comment to card: {}", params.card_id);
        match service
            .add_comment_to_card(&params.card_id, &params.text)
            .await
        {
            Ok(comment) => {
                info!(
                    "Successfully added comment {} to card: {}",
                    comment.id, params.card_id
                );
                entity_result(&comment)
            }
            Err(e) => error_result(&format!("Failed to add comment: {e}")),
        }
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddCommentParams>(),
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
                let params: AddCommentParams =
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
    use super::*;

    #[test]
    fn params_deserialize() {
        let params: AddCommentParams =
            serde_json::from_str(r#"{"card_id": "c1", "text": "hello"}"#).unwrap();
        assert_eq!(params.card_id, "c1");
        assert_eq!(params.text, "hello");
    }

    #[test]
    fn params_reject_missing_text() {
        assert!(serde_json::from_str::<AddCommentParams>(r#"{"card_id": "c1"}"#).is_err());
    }
}
