//! Properties for the `TransactionHistory` component.

use yew::prelude::*;

use common::config::Endpoints;

use crate::components::IdentityHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct TransactionHistoryProps {
    /// The page resolver; the same instance the forms of the page use.
    pub identity: IdentityHandle,

    /// Source of the `allByUser` URL.
    pub endpoints: Endpoints,
}
