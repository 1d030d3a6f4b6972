//! Tool Registry - central metadata for all available tools.

use rmcp::model::Tool;

use super::definitions::{
    AddCommentTool, CreateCardTool, DeleteCardTool, GetCardCommentsTool, GetCardTool,
    GetCardsTool, UpdateCardTool,
};

/// Tool registry - the single source of truth for which tools exist.
///
/// The router in `router.rs` builds its routes from the same definitions; a
/// test keeps the two in sync.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetCardTool::NAME,
            GetCardsTool::NAME,
            CreateCardTool::NAME,
            UpdateCardTool::NAME,
            DeleteCardTool::NAME,
            GetCardCommentsTool::NAME,
            AddCommentTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetCardTool::to_tool(),
            GetCardsTool::to_tool(),
            CreateCardTool::to_tool(),
            UpdateCardTool::to_tool(),
            DeleteCardTool::to_tool(),
            GetCardCommentsTool::to_tool(),
            AddCommentTool::to_tool(),
        ]
    }
}
