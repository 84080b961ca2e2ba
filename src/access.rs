//! Role-based route decisions for the dashboards. The host router performs
//! the actual navigation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    Buyer,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(String);

impl Role {
    pub fn dashboard_route(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Seller => "/seller/dashboard",
            Role::Buyer => "/buyer/dashboard",
        }
    }

    /// Role as read from a stored profile. Missing or unrecognised values
    /// are treated as buyers.
    pub fn from_stored(value: Option<&str>) -> Role {
        value.and_then(|v| v.parse().ok()).unwrap_or(Role::Buyer)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "seller" => Ok(Role::Seller),
            "buyer" => Ok(Role::Buyer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "admin",
            Role::Seller => "seller",
            Role::Buyer => "buyer",
        })
    }
}

/// What the identity provider has told us so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSnapshot {
    Loading,
    Anonymous,
    SignedIn { role: Option<Role> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Auth state unresolved; render a loading placeholder.
    Loading,
    Allow,
    Redirect(&'static str),
}

/// Where a signed-in user landing on a public page should be sent. Pages
/// that must stay reachable while signed in pass `skip`.
pub fn landing_redirect(auth: &AuthSnapshot, skip: bool) -> Option<&'static str> {
    match auth {
        AuthSnapshot::SignedIn { role: Some(role) } if !skip => Some(role.dashboard_route()),
        _ => None,
    }
}

pub fn guard(auth: &AuthSnapshot, allowed: &[Role], redirect_to: &'static str) -> Access {
    match auth {
        AuthSnapshot::Loading => Access::Loading,
        AuthSnapshot::Anonymous => Access::Redirect(redirect_to),
        AuthSnapshot::SignedIn { role: None } => Access::Allow,
        AuthSnapshot::SignedIn { role: Some(role) } if allowed.contains(role) => Access::Allow,
        AuthSnapshot::SignedIn { role: Some(role) } => Access::Redirect(role.dashboard_route()),
    }
}
