//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `api` - the Litscout HTTP service (plus mock/in-memory test doubles)
//! - `document` - docx export and the local file sink
//! - `session` - credential holders implementing the session port

pub mod api;
pub mod document;
pub mod session;
