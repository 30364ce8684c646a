//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::session::Session;

/// Current view of the single-page app
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Login,
    Register,
    Lists,
    List(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view - read
    pub route: ReadSignal<Route>,
    /// Active view - write
    set_route: WriteSignal<Route>,
    /// Persisted credential handle
    pub session: Session,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), session: Session) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session,
        }
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Whether the task view for `list_id` is still the active view.
    /// Async completions check this before touching view state; a response
    /// that lands after navigation must be ignored.
    pub fn is_viewing_list(&self, list_id: &str) -> bool {
        matches!(self.route.get_untracked(), Route::List(ref id) if id == list_id)
    }

    /// Whether `route` is still the active view
    pub fn is_at(&self, route: &Route) -> bool {
        self.route.get_untracked() == *route
    }

    /// Clear the credential and return to the login view
    pub fn logout(&self) {
        self.session.clear();
        self.set_route.set(Route::Login);
    }
}
