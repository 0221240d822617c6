//! The auth token kept in `localStorage` between page loads.

use crate::settings::TOKEN_STORAGE_KEY;
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// The stored token, if any
pub fn stored_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, token) {
                log::error!("Failed to persist token: {:?}", e);
            }
        }
        None => log::warn!("localStorage unavailable, token kept for this page only"),
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
            log::error!("Failed to remove token: {:?}", e);
        }
    }
}
