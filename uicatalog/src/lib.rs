//! # uicatalog
//!
//! Serves a UI component registry to AI agents over the Model Context
//! Protocol.
//!
//! ## Features
//!
//! - **Category tools**: One `get<Category>` tool per category, returning install
//!   instructions, source and linked usage examples for each component
//! - **Catalog tool**: `getUIComponents` returns the registry's component list as is
//! - **Dependency index**: Examples are linked to the components they declare
//!   as registry dependencies
//! - **Validated output**: Every record is checked against a fixed JSON schema
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uicatalog::{Config, HttpRegistryClient, McpServer};
//!
//! # async fn run() -> uicatalog::Result<()> {
//! let config = Arc::new(Config::new());
//! let registry = Arc::new(HttpRegistryClient::new(Arc::clone(&config))?);
//! let server = McpServer::initialize(config, registry).await?;
//!
//! let result = server
//!     .call_tool_by_name("getRatings", serde_json::Map::new())
//!     .await;
//! # let _ = result;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Error types used throughout the library
pub mod error;

/// Shared helpers
pub mod common;

/// Layered configuration
pub mod config;

/// Category table
pub mod categories;

/// Registry data types and clients
pub mod registry;

/// Example → component dependency index
pub mod dependency_index;

/// Name formatting helpers
pub mod formatters;

/// Output record schema
pub mod schema;

/// Component detail assembly
pub mod assembler;

/// Registry snapshots
pub mod snapshot;

/// Category resolution
pub mod resolver;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use assembler::{ComponentAssembler, ComponentExample, IndividualComponentDetail};
pub use categories::{default_categories, Category};
pub use config::{Config, ConfigError};
pub use dependency_index::{DependencyIndex, DependencyMatcher};
pub use error::{CatalogError, Result};
pub use mcp::McpServer;
pub use registry::{
    ComponentSummary, ExampleSummary, HttpRegistryClient, MockRegistryClient, RegistryClient,
    RegistryItem,
};
pub use resolver::{CategoryOutcome, CategoryResolver};
pub use schema::OutputSchema;
pub use snapshot::CatalogSnapshot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
