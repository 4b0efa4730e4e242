//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login`, `submission`, etc.) so pages
//! can depend on small focused models. The flow types are plain structs the
//! pages hold in signals; the session store and result cache are context
//! handles shared by every page.

pub mod history;
pub mod login;
pub mod result_cache;
pub mod session;
pub mod submission;
