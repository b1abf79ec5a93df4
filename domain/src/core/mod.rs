//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: configuration and session errors
//! - [`session_ref::SessionRef`]: course/quiz identifier used for routing and display

pub mod error;
pub mod session_ref;
