//! Browser Storage
//!
//! localStorage keys and raw string access. The session writes the token
//! and the serialized user profile together and clears them together.

use gloo_storage::{LocalStorage, Storage};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
/// Optional override for the API base URL, set by hand when the backend
/// is not served from the same origin
pub const API_BASE_KEY: &str = "api_base";

pub fn get(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    let _ = LocalStorage::raw().set_item(key, value);
}

pub fn remove(key: &str) {
    LocalStorage::delete(key);
}
