//! Application Context
//!
//! Shared state provided via Leptos Context API: current route, signed-in
//! session and configuration.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::notify;
use crate::routes::Route;
use crate::session::{self, Session};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being shown - read
    pub route: ReadSignal<Route>,
    /// Page being shown - write
    set_route: WriteSignal<Route>,
    /// Signed-in user (None = signed out) - read
    pub session: ReadSignal<Option<Session>>,
    /// Signed-in user - write
    set_session: WriteSignal<Option<Session>>,
    config: StoredValue<AppConfig>,
}

/// Route for the address bar as it is right now
pub fn current_location_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Login;
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

fn push_history(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(e) = result {
        log::warn!("history update to {} failed: {:?}", path, e);
    }
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        config: AppConfig,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session: session.0,
            set_session: session.1,
            config: StoredValue::new(config),
        }
    }

    /// Push a history entry and show the page
    pub fn navigate(&self, route: Route) {
        log::debug!("navigate -> {}", route.to_path());
        push_history(&route.to_path(), false);
        self.set_route.set(route);
    }

    /// Swap the current history entry (redirects)
    pub fn redirect(&self, route: Route) {
        push_history(&route.to_path(), true);
        self.set_route.set(route);
    }

    /// Follow the address bar after back/forward
    pub fn sync_from_location(&self) {
        self.set_route.set(current_location_route());
    }

    /// Store a freshly issued token; false if it cannot be decoded
    pub fn sign_in(&self, token: &str) -> bool {
        match Session::from_token(token, session::now_secs()) {
            Some(signed_in) => {
                log::info!("signed in as employee {}", signed_in.employee_id());
                session::save_token(token);
                self.set_session.set(Some(signed_in));
                true
            }
            None => false,
        }
    }

    pub fn sign_out(&self) {
        log::info!("signing out");
        session::clear_token();
        self.set_session.set(None);
        self.navigate(Route::Login);
    }

    pub fn image_url(&self, url: &str) -> String {
        self.config.with_value(|config| config.resolve_image_url(url))
    }

    /// Client carrying the current bearer token
    pub fn api(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        ApiClient::new(self.config.with_value(|c| c.api_base_url.clone()), token)
    }

    pub fn employee_id(&self) -> Option<u32> {
        self.session.with_untracked(|s| s.as_ref().map(Session::employee_id))
    }

    pub fn is_admin(&self) -> bool {
        self.session.with_untracked(|s| s.as_ref().is_some_and(Session::is_admin))
    }

    /// Log a failed call and tell the user. A 401 ends the session.
    pub fn report_error(&self, message: &str, err: &ApiError) {
        log::error!("{}: {}", message, err);
        if matches!(err, ApiError::Unauthorized) {
            notify::alert("Your session has expired. Please sign in again.");
            self.sign_out();
        } else {
            notify::alert(message);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
