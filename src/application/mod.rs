//! Application layer - use-case orchestration over the ports.
//!
//! - `ResearchFlow` - the submission state machine driver (generate + save)
//! - `ResearchLibrary` - list / fetch / delete over saved research
//! - `ExportArtifact` - serialize an artifact and hand it to the file sink

mod export_artifact;
mod research_flow;
mod research_library;

pub use export_artifact::ExportArtifact;
pub use research_flow::{ResearchFlow, SaveOutcome, SubmitOutcome};
pub use research_library::ResearchLibrary;
