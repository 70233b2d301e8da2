//! Browser `localStorage` helpers
//!
//! Values are stored as JSON. On the server every read misses and every
//! write is a no-op, so callers never need their own cfg gates.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

pub const THEME_KEY: &str = "aitoolhub-theme";
pub const CURRENCY_KEY: &str = "aitoolhub-currency";
pub const CART_KEY: &str = "aitoolhub-cart";
pub const USER_KEY: &str = "aitoolhub-user";

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read and decode a JSON value
#[cfg(not(feature = "ssr"))]
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, %err, "discarding unreadable stored value");
            remove(key);
            None
        }
    }
}

/// Encode and write a JSON value
#[cfg(not(feature = "ssr"))]
pub fn save<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage not available")?;
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    storage
        .set_item(key, &json)
        .map_err(|_| format!("Failed to store {}", key))
}

#[cfg(not(feature = "ssr"))]
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Server stubs
#[cfg(feature = "ssr")]
pub fn load<T: DeserializeOwned>(_key: &str) -> Option<T> {
    None
}

#[cfg(feature = "ssr")]
pub fn save<T: Serialize>(_key: &str, _value: &T) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
pub fn remove(_key: &str) {}

/// Save and log on failure; storage is best effort
pub fn persist<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = save(key, value) {
        tracing::warn!(key, %err, "could not persist to localStorage");
    }
}
