//! API Adapters - implementations of the gateway and store ports.
//!
//! ## Available Adapters
//!
//! - `HttpResearchGateway` / `HttpResearchStore` - the real Litscout
//!   service over reqwest, sharing one client configuration
//! - `MockResearchGateway` - scripted gateway for testing
//! - `InMemoryResearchStore` - contract-faithful store for testing

mod dto;
mod http;
mod http_gateway;
mod http_store;
mod in_memory_store;
mod mock_gateway;

pub use http::ApiClientConfig;
pub use http_gateway::HttpResearchGateway;
pub use http_store::HttpResearchStore;
pub use in_memory_store::InMemoryResearchStore;
pub use mock_gateway::MockResearchGateway;
