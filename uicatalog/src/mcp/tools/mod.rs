//! MCP tool implementations
//!
//! `getUIComponents` returns the raw catalog; every other tool is generated
//! from the category table.

pub mod catalog;
pub mod category;

pub use catalog::CatalogTool;
pub use category::{category_tool_specs, register_category_tools, CategoryTool, CategoryToolSpec};
