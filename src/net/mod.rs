//! External collaborators: the hosted identity provider and the GraphQL
//! data service. Both are reached over HTTP on the same origin; neither is
//! re-implemented here.

pub mod api;
pub mod identity;
pub mod types;
