//! Session Collaborator
//!
//! Binding to the host page's auth global. The only thing this app needs
//! from auth is an identifier to namespace storage under; it is resolved
//! once at mount and handed down explicitly from there.

use serde::Deserialize;
use user_storage::GUEST_USER_ID;

/// Shape of the host session object, all fields optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionInfo {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
}

/// The resolved identity the app runs as
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub user_id: String,
    pub display_name: Option<String>,
}

impl ActiveSession {
    pub fn guest() -> Self {
        Self {
            user_id: GUEST_USER_ID.to_string(),
            display_name: None,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.user_id == GUEST_USER_ID
    }
}

/// Total resolution: any missing or blank identifier becomes guest
fn resolve(info: Option<SessionInfo>) -> ActiveSession {
    let Some(info) = info else {
        return ActiveSession::guest();
    };
    let user_id = info.user_id.as_deref().unwrap_or("").trim().to_string();
    if user_id.is_empty() {
        return ActiveSession::guest();
    }
    ActiveSession {
        user_id,
        display_name: info
            .display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
    }
}

#[cfg(target_arch = "wasm32")]
mod host {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["window", "__APP_AUTH__"], js_name = session, catch)]
        pub fn auth_session() -> Result<JsValue, JsValue>;
    }
}

/// Ask the host page who is signed in. Missing global, thrown errors, and
/// malformed payloads all land on the guest session.
#[cfg(target_arch = "wasm32")]
pub fn active_session() -> ActiveSession {
    let value = match host::auth_session() {
        Ok(v) => v,
        Err(_) => {
            web_sys::console::log_1(&"[SESSION] no auth global, using guest".into());
            return ActiveSession::guest();
        }
    };
    // The host may hand back a session object or a bare id string
    let info = serde_wasm_bindgen::from_value::<SessionInfo>(value.clone())
        .ok()
        .or_else(|| {
            value.as_string().map(|id| SessionInfo {
                user_id: Some(id),
                display_name: None,
            })
        });
    resolve(info)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn active_session() -> ActiveSession {
    resolve(None)
}
