//! Reusable UI components, including the auth provider and route gate.

pub mod access_denied;
pub mod auth_provider;
pub mod loading_screen;
pub mod protected_route;
pub mod sign_out;
