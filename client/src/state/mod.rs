//! Page state for the project and rating lists.
//!
//! DESIGN
//! ======
//! `resource` holds the shared load/error/form cycle; `projects` and
//! `ratings` add entity-specific drafts and lookups on top of it.

pub mod projects;
pub mod ratings;
pub mod resource;
