//! Route pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` is public; the rest render inside the route guard and read the
//! signed-in `Identity` from context.

pub mod dashboard;
pub mod login;
pub mod summaries;
pub mod summary;
