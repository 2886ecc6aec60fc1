//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::services::ServiceKind;
use crate::session::ActiveSession;
use crate::storage::AppStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Identity all storage keys are namespaced under
    pub user_id: String,
    /// Shown in the header when the host session provides one
    pub display_name: Option<String>,
    /// Completion badge per service, panel display order
    pub completion: Vec<(ServiceKind, bool)>,
}

impl AppState {
    pub fn new(session: &ActiveSession) -> Self {
        Self {
            user_id: session.user_id.clone(),
            display_name: session.display_name.clone(),
            completion: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Recompute every service's completion badge from storage
pub fn store_refresh_completion(store: &AppStore, storage: &AppStorage) {
    *store.completion().write() = storage.completion();
}

/// Badge state for one service, false until the first refresh
pub fn store_service_complete(store: &AppStore, kind: ServiceKind) -> bool {
    store
        .completion()
        .read()
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, complete)| *complete)
        .unwrap_or(false)
}
