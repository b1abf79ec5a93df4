//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod interaction;
pub mod progress;
pub mod question_source;
pub mod result_submitter;
