//! Command handlers for wasm-size-report CLI
//!
//! Each submodule handles one CLI command.

pub mod collect;
pub mod render;

pub use collect::cmd_collect;
pub use render::cmd_render;
