//! TUI word quiz (workspace facade crate).
//!
//! This package keeps the public `tui_wordquiz::{catalog,core,input,term,types}`
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_wordquiz_catalog as catalog;
pub use tui_wordquiz_core as core;
pub use tui_wordquiz_input as input;
pub use tui_wordquiz_term as term;
pub use tui_wordquiz_types as types;
