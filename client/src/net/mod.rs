//! Networking modules for the RMS REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and error mapping, and `types` defines the
//! wire schema shared by every page.

pub mod api;
pub mod types;
