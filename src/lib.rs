//! Lettergrid (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths and hosts the
//! per-game [`session`] glue used by the binary.

pub mod session;

pub use lettergrid_core as core;
pub use lettergrid_input as input;
pub use lettergrid_term as term;
pub use lettergrid_types as types;

pub use session::{build_session, GameKind, Session};
