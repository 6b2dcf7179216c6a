//! Signed session tokens: issue a token for a subject, verify it back.
//!
//! The core is [`token::issue`] and [`token::verify`], both pure functions of
//! their input, an injected [`config::TokenConfig`] and the clock. The rest of
//! the crate exposes them over HTTP.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

pub use config::TokenConfig;
pub use error::{Error, Result};
pub use token::{issue, verify, Claims};
