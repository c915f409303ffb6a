//! Litscout - Related Literature Review Generation Client
//!
//! This crate implements the research-request lifecycle behind the Litscout
//! research assistant: field validation, the submission state machine with
//! auth-aware failure handling, Word-document export of generated reviews,
//! and the persistence bridge to the saved-research service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
