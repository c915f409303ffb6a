//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResearchGateway` - the generation call (`POST /generate_report`)
//! - `ResearchStore` - persistence bridge (save / list / fetch / delete)
//! - `SessionProvider` - external credential owner and login redirect
//! - `ArtifactExporter` / `DocumentSink` - document export pipeline
//! - `ApiError` - the failure taxonomy shared by gateway and store

mod api_error;
mod export;
mod research_gateway;
mod research_store;
mod session;

pub use api_error::ApiError;
pub use export::{
    ArtifactExporter, DocumentSink, ExportError, ExportedDocument, DOCX_CONTENT_TYPE,
};
pub use research_gateway::ResearchGateway;
pub use research_store::ResearchStore;
pub use session::SessionProvider;
