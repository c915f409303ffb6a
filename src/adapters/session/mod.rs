//! Session Adapters - implementations of the session port.

mod static_session;

pub use static_session::StaticSession;
