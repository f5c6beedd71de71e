pub mod config;
pub mod error;
pub mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::{ApiConfig, AppConfig, LoginRoute};
pub use error::StoreError;
pub use token::{KeyValueStore, TokenStore, TOKEN_KEY};
