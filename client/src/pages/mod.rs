//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal and the fetch/create orchestration, and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod projects;
pub mod ratings;
pub(crate) mod request;
