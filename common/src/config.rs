//! Page-level configuration, read once when the client starts.
//!
//! Pages declare their settings as `data-*` attributes on `<body>`:
//!
//! - `data-identity-strategy`: `static` or `remote`. When absent the page
//!   uses `static` if it renders the `#userId` anchor and `remote` otherwise.
//! - `data-api-base`: prefix for every API path (defaults to same origin).
//! - `data-log-level`: `off`, `error`, `warn`, `info`, `debug` or `trace`.

use std::str::FromStr;

use log::LevelFilter;

use crate::model::user::UserId;

pub const IDENTITY_STRATEGY_ATTR: &str = "data-identity-strategy";
pub const API_BASE_ATTR: &str = "data-api-base";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

const API_PATH: &str = "/api";

/// Where the current user's id comes from. One per page, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityStrategy {
    /// `data-user-id` rendered by the server on the `#userId` element.
    Static,
    /// `GET /api/currentUser` with the session cookie.
    Remote,
}

impl FromStr for IdentityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(IdentityStrategy::Static),
            "remote" => Ok(IdentityStrategy::Remote),
            other => Err(format!("unknown identity strategy `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub identity: IdentityStrategy,
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            identity: IdentityStrategy::Remote,
            api_base: String::new(),
            log_level: LevelFilter::Info,
        }
    }
}

impl PageConfig {
    /// Builds the configuration from an attribute lookup.
    ///
    /// `static_anchor_present` tells whether the page renders the element
    /// holding `data-user-id`; it only matters when no strategy is declared.
    /// Invalid values fall back to defaults and are returned as warnings,
    /// since the logger is not installed yet when this runs.
    pub fn from_attributes<F>(attr: F, static_anchor_present: bool) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let detected = if static_anchor_present {
            IdentityStrategy::Static
        } else {
            IdentityStrategy::Remote
        };

        let identity = match attr(IDENTITY_STRATEGY_ATTR) {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                warnings.push(e);
                detected
            }),
            None => detected,
        };

        let api_base = attr(API_BASE_ATTR)
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let log_level = match attr(LOG_LEVEL_ATTR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warnings.push(format!("unknown log level `{}`", raw));
                LevelFilter::Info
            }),
            None => LevelFilter::Info,
        };

        (
            Self {
                identity,
                api_base,
                log_level,
            },
            warnings,
        )
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }
}

/// URLs of every backend endpoint the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: format!("{}{}", base.trim_end_matches('/'), API_PATH),
        }
    }

    pub fn current_user(&self) -> String {
        format!("{}/currentUser", self.base)
    }

    pub fn register(&self) -> String {
        format!("{}/register", self.base)
    }

    pub fn relation_add(&self) -> String {
        format!("{}/relation/add", self.base)
    }

    pub fn relations_of(&self, user: &UserId) -> String {
        format!("{}/relation/all/{}", self.base, segment(user))
    }

    /// Used when the transaction form declares no `action`.
    pub fn transaction_create(&self) -> String {
        format!("{}/transactions/create", self.base)
    }

    pub fn transactions_of(&self, user: &UserId) -> String {
        format!("{}/transactions/allByUser/{}", self.base, segment(user))
    }

    pub fn update_user(&self, user: &UserId) -> String {
        format!("{}/users/update/{}", self.base, segment(user))
    }
}

fn segment(user: &UserId) -> String {
    url::form_urlencoded::byte_serialize(user.as_str().as_bytes()).collect()
}
