//! Tool catalog: declarative specs, the static tool table, and typed
//! response models.
//!
//! Everything here is pure data. The engine in [`crate::engine`] is the only
//! place that turns a [`ToolSpec`] plus caller arguments into network I/O.

pub mod defs;
pub mod models;
pub mod spec;

pub use spec::{AuthHeader, ParamKind, ParamSpec, ResponseShape, ToolDef, ToolSpec};
