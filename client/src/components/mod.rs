//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, forms, and chrome for the list pages. Forms read
//! and write the page-owned state signal they are handed; none of them talk
//! to the network directly.

pub mod error_banner;
pub mod nav_bar;
pub mod project_card;
pub mod project_form;
pub mod rasa;
pub mod rating_card;
pub mod rating_form;
pub mod retry_notice;
