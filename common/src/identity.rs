//! Resolution of the acting user's id.
//!
//! A page builds exactly one resolver through [`resolver_for`] and shares it
//! between all its features, so "current user" means the same thing
//! everywhere on the page.

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::{Endpoints, IdentityStrategy};
use crate::error::ClientError;
use crate::http::{get_json, HttpClient, HttpRequest};
use crate::model::user::{CurrentUser, UserId};

#[async_trait(?Send)]
pub trait IdentityResolver {
    /// Fails only with `ClientError::IdentityUnresolved`.
    async fn resolve(&self) -> Result<UserId, ClientError>;

    fn strategy(&self) -> IdentityStrategy;
}

/// Identity rendered into the page, captured once at start-up.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    /// `attribute` is the raw `data-user-id` value, `None` when the element
    /// or attribute is missing.
    pub fn from_attribute(attribute: Option<String>) -> Self {
        Self {
            user: attribute.as_deref().and_then(UserId::parse),
        }
    }
}

#[async_trait(?Send)]
impl IdentityResolver for StaticIdentity {
    async fn resolve(&self) -> Result<UserId, ClientError> {
        self.user.clone().ok_or_else(|| {
            let err = ClientError::IdentityUnresolved(
                "no `data-user-id` attribute on the page".to_string(),
            );
            log::error!("{}", err);
            err
        })
    }

    fn strategy(&self) -> IdentityStrategy {
        IdentityStrategy::Static
    }
}

/// Identity asked from the backend on every resolution, so a session change
/// is never hidden behind a cached value.
pub struct RemoteIdentity<C> {
    client: C,
    url: String,
}

impl<C: HttpClient> RemoteIdentity<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait(?Send)]
impl<C: HttpClient> IdentityResolver for RemoteIdentity<C> {
    async fn resolve(&self) -> Result<UserId, ClientError> {
        let request = HttpRequest::get(self.url.as_str()).with_credentials();
        let user = get_json::<C, CurrentUser>(&self.client, request)
            .await
            .and_then(|user| {
                user.id.ok_or_else(|| {
                    ClientError::IdentityUnresolved("response carries no `id`".to_string())
                })
            });

        user.map_err(|err| {
            log::error!("could not fetch the current user: {}", err);
            match err {
                ClientError::IdentityUnresolved(_) => err,
                other => ClientError::IdentityUnresolved(other.to_string()),
            }
        })
    }

    fn strategy(&self) -> IdentityStrategy {
        IdentityStrategy::Remote
    }
}

/// The single resolver for a page.
pub fn resolver_for<C>(
    strategy: IdentityStrategy,
    attribute: Option<String>,
    client: C,
    endpoints: &Endpoints,
) -> Rc<dyn IdentityResolver>
where
    C: HttpClient + 'static,
{
    match strategy {
        IdentityStrategy::Static => Rc::new(StaticIdentity::from_attribute(attribute)),
        IdentityStrategy::Remote => Rc::new(RemoteIdentity::new(client, endpoints.current_user())),
    }
}
