//! Application-level configuration.
//!
//! - [`SessionParams`]: how a quiz session behaves (timer enforcement, result recording)

pub mod session_params;

pub use session_params::SessionParams;
