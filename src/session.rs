//! Session Storage
//!
//! Bearer token and custom project list, persisted in `localStorage`.

use mmis_core::catalog;
use mmis_core::{decode_claims, Claims};

const TOKEN_KEY: &str = "token";
const PROJECTS_KEY: &str = "mmis_projects";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

fn write(key: &str, value: &str) {
    match storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write to {}", key);
            }
        }
        None => log::warn!("localStorage unavailable; {} not saved", key),
    }
}

fn remove(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

/// Signed-in user: raw token plus its decoded claims
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    /// Decode and check expiry; `None` for anything unusable
    pub fn from_token(token: &str, now_secs: i64) -> Option<Self> {
        match decode_claims(token) {
            Ok(claims) if !claims.is_expired(now_secs) => Some(Self {
                token: token.to_string(),
                claims,
            }),
            Ok(_) => {
                log::info!("stored token has expired");
                None
            }
            Err(e) => {
                log::warn!("stored token rejected: {}", e);
                None
            }
        }
    }

    pub fn employee_id(&self) -> u32 {
        self.claims.employee_id
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role().is_admin()
    }
}

pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn load_session() -> Option<Session> {
    let token = read(TOKEN_KEY)?;
    let session = Session::from_token(&token, now_secs());
    if session.is_none() {
        remove(TOKEN_KEY);
    }
    session
}

pub fn save_token(token: &str) {
    write(TOKEN_KEY, token);
}

pub fn clear_token() {
    remove(TOKEN_KEY);
}

/// Defaults merged with the saved custom projects
pub fn load_projects() -> Vec<String> {
    let custom: Vec<String> = read(PROJECTS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    catalog::merge_projects(&custom)
}

/// Only custom entries are persisted
pub fn save_projects(projects: &[String]) {
    match serde_json::to_string(&catalog::custom_only(projects)) {
        Ok(raw) => write(PROJECTS_KEY, &raw),
        Err(e) => log::error!("could not serialize project list: {}", e),
    }
}
