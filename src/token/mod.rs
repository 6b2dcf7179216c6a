//! Session token issuance, verification and bearer extraction.
//! Used by: handlers, library callers.

pub mod claims;
pub mod extract;
pub mod sign;
pub mod verify;

pub use claims::Claims;
pub use sign::issue;
pub use verify::verify;
