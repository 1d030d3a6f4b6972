//! Tools domain module.
//!
//! All tool-related functionality for the MCP server. Tools are executable
//! functions that MCP clients call to read or mutate Trello resources.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder
//! - `registry.rs` - Central tool metadata registry
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/card/` (or a new resource group)
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it in the group's `mod.rs`
//! 4. Add its route in `router.rs` and its metadata in `registry.rs`

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
