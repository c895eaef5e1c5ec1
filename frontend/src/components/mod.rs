//! Yew components mounted into the list hosts of the server-rendered pages.

pub mod helpers;
pub mod relations;
pub mod transactions;

use std::ops::Deref;
use std::rc::Rc;

use common::identity::IdentityResolver;

/// Shared page resolver, passed to components as a prop.
///
/// Two handles are equal when they point at the same resolver, which is all
/// Yew needs to decide whether props changed.
#[derive(Clone)]
pub struct IdentityHandle(pub Rc<dyn IdentityResolver>);

impl PartialEq for IdentityHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for IdentityHandle {
    type Target = dyn IdentityResolver;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
