//! Vitrina - product catalog backend with LLM-generated ad sheets
//!
//! Vitrina stores a small product catalog in SQLite and turns selections
//! of products into platform-specific marketing text ("ad sheets") by
//! composing a prompt around a fixed template skeleton and sending it to
//! an LLM provider. Generated content is persisted verbatim and only
//! changes through explicit regeneration.
//!
//! # Modules
//!
//! - [`domain`] - Product and ad-sheet records plus their input shapes
//! - [`prompts`] - Template registry and prompt composition
//! - [`llm`] - LLM client trait and the OpenAI/Anthropic implementations
//! - [`generate`] - Skeleton lookup, composition, and provider call in one step
//! - [`store`] - SQLite persistence
//! - [`catalog`] - Orchestration and the error taxonomy
//! - [`uploads`] - Product photo storage
//! - [`api`] - Actix HTTP surface
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod generate;
pub mod llm;
pub mod prompts;
pub mod store;
pub mod uploads;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use config::{Config, LlmConfig, Provider, ResolvedLlmConfig};
pub use domain::{
    AdSheet, AdSheetCreate, AdSheetUpdate, AttrMap, Product, ProductAvailability, ProductCreate,
    ProductUpdate,
};
pub use generate::{GenerateError, Generator};
pub use llm::{AnthropicClient, LlmClient, LlmError, OpenAIClient, create_client};
pub use prompts::{ComposeError, PromptComposer, TemplateRegistry};
pub use store::{Store, StoreError};
pub use uploads::{PhotoUpload, UploadError, Uploads};
