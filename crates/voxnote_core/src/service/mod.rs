//! Capture use-case services.
//!
//! # Responsibility
//! - Orchestrate classification and hand-off to a storage collaborator.
//! - Keep storage details behind the `CaptureSink` contract.

pub mod capture_service;
