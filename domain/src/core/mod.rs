//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the Gemini model a session talks to

pub mod model;
