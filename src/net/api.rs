//! GraphQL helpers for the data service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, attaching the
//! stored access token on every request so the service can enforce its
//! row-level authorization. Server-side (SSR): stubs returning transport
//! errors since the lookup is only meaningful in the browser.

#![allow(clippy::unused_async)]

use std::fmt;

use super::types::User;

#[cfg(feature = "hydrate")]
const GRAPHQL_URL: &str = "/v1/graphql";

#[cfg(feature = "hydrate")]
const GET_USER_QUERY: &str = r"
query getUser($id: uuid!) {
  users(where: {id: {_eq: $id}}) {
    id
    email
    name
    role
    created_at
    department {
      id
      name
      description
    }
    profile_picture
  }
}
";

/// Why a user-record lookup failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchUserError {
    /// The authenticated identity has no application user row.
    NotFound,
    /// The data service was unreachable or answered with a protocol error.
    Transport(String),
}

impl fmt::Display for FetchUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("User not found"),
            Self::Transport(reason) => f.write_str(reason),
        }
    }
}

/// Fetch the application user record keyed by the identity provider's id.
///
/// # Errors
///
/// `NotFound` when no row matches; `Transport` for HTTP, decode, or
/// GraphQL-level failures.
pub async fn fetch_application_user(identity_id: &str) -> Result<User, FetchUserError> {
    #[cfg(feature = "hydrate")]
    {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct UsersData {
            users: Vec<User>,
        }

        #[derive(Deserialize)]
        struct GraphQlError {
            message: String,
        }

        #[derive(Deserialize)]
        struct GraphQlResponse {
            #[serde(default)]
            data: Option<UsersData>,
            #[serde(default)]
            errors: Option<Vec<GraphQlError>>,
        }

        let body = serde_json::json!({
            "query": GET_USER_QUERY,
            "variables": { "id": identity_id },
        });

        let mut request = gloo_net::http::Request::post(GRAPHQL_URL);
        request = if let Some(token) = super::identity::stored_access_token() {
            request.header("Authorization", &format!("Bearer {token}"))
        } else {
            request.header("x-hasura-role", "anonymous")
        };

        let resp = request
            .json(&body)
            .map_err(|e| FetchUserError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchUserError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchUserError::Transport(format!(
                "user lookup failed: {}",
                resp.status()
            )));
        }

        let parsed: GraphQlResponse = resp
            .json()
            .await
            .map_err(|e| FetchUserError::Transport(e.to_string()))?;

        if let Some(errors) = parsed.errors {
            let reason = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FetchUserError::Transport(reason));
        }

        parsed
            .data
            .and_then(|d| d.users.into_iter().next())
            .ok_or(FetchUserError::NotFound)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identity_id;
        Err(FetchUserError::Transport("not available on server".to_owned()))
    }
}
