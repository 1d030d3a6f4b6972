//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module wires them all
//! to a shared [`CardService`].

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::trello::CardService;

use super::definitions::{
    AddCommentTool, CreateCardTool, DeleteCardTool, GetCardCommentsTool, GetCardTool,
    GetCardsTool, UpdateCardTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<CardService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetCardTool::create_route(service.clone()))
        .with_route(GetCardsTool::create_route(service.clone()))
        .with_route(CreateCardTool::create_route(service.clone()))
        .with_route(UpdateCardTool::create_route(service.clone()))
        .with_route(DeleteCardTool::create_route(service.clone()))
        .with_route(GetCardCommentsTool::create_route(service.clone()))
        .with_route(AddCommentTool::create_route(service))
}
