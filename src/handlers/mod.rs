//! HTTP handler modules.
//! Used by: server.

pub mod issue;
pub mod me;
pub mod status;
pub mod verify;
