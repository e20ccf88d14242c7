//! Route guard for pages that need a signed-in user.
//!
//! The guard owns no state. It re-reads [`AuthState`] on every call and maps
//! it to one of three outcomes:
//!
//! | `is_authenticated` | `loading` | outcome |
//! |---|---|---|
//! | true | any | render |
//! | false | true | defer |
//! | false | false | redirect to login |

use devlink_types::AuthState;

use crate::navigation::{LOGIN, Navigate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; render nothing yet
    Defer,
    Redirect(&'static str),
    Render,
}

/// Guards a destination behind authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateRoute {
    login_path: &'static str,
}

impl Default for PrivateRoute {
    fn default() -> Self {
        Self { login_path: LOGIN }
    }
}

impl PrivateRoute {
    pub fn new(login_path: &'static str) -> Self {
        Self { login_path }
    }

    pub fn decide(&self, auth: &AuthState) -> RouteDecision {
        if auth.is_authenticated {
            RouteDecision::Render
        } else if auth.loading {
            RouteDecision::Defer
        } else {
            RouteDecision::Redirect(self.login_path)
        }
    }

    /// Renders `component` with `params` when allowed.
    ///
    /// On redirect the login route is pushed to `nav`. Returns `None`
    /// whenever the component was not rendered.
    pub fn render<P, T>(
        &self,
        auth: &AuthState,
        nav: &mut impl Navigate,
        params: P,
        component: impl FnOnce(P) -> T,
    ) -> Option<T> {
        match self.decide(auth) {
            RouteDecision::Render => Some(component(params)),
            RouteDecision::Defer => None,
            RouteDecision::Redirect(path) => {
                tracing::debug!(path, "route guard redirect");
                nav.push(path);
                None
            }
        }
    }
}
