//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth_view`, `picker`) so
//! individual components can depend on small focused models. Stores are
//! provided as `RwSignal` contexts from the app root; nothing here is an
//! ambient singleton.

pub mod auth_view;
pub mod picker;
pub mod session;
