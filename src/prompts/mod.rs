//! Prompt construction for ad-sheet generation
//!
//! The registry owns the closed platform/template table, the composer
//! renders the instruction prompt around the embedded skeletons.

mod compose;
pub mod embedded;
mod registry;

pub use compose::{ComposeError, PromptComposer};
pub use registry::TemplateRegistry;
