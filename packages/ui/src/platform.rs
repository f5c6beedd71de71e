//! Platform-specific construction of the controller.
//!
//! Picks the token backend for the target:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Desktop / Mobile** (native): files under the data dir via [`store::FileStore`]
//!
//! Native builds read `mindcheck.toml` from the config dir; the web build runs
//! with the default configuration.

use api::ApiClient;
use store::{AppConfig, TokenStore};

use crate::controller::Controller;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

pub type AppController = Controller<ApiClient, PlatformStore>;

pub fn load_config() -> AppConfig {
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        AppConfig::load_native()
    }
}

fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let store = store::FileStore::default_location();
        tracing::debug!(path = %store.base().display(), "Token storage location");
        store
    }
}

/// Build the controller for the current platform.
pub fn make_controller() -> AppController {
    let client = ApiClient::new(&load_config().api);
    tracing::info!(
        base_url = client.base_url(),
        login_route = ?client.login_route(),
        "Configured API client"
    );
    Controller::new(client, TokenStore::new(make_store()))
}
