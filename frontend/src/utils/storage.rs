use web_sys::{Storage, Window};

use crate::config::StorageKind;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn session_storage() -> Result<Storage, String> {
    window()?
        .session_storage()
        .map_err(|_| "No sessionStorage".to_string())?
        .ok_or_else(|| "No sessionStorage".to_string())
}

pub fn storage_for(kind: StorageKind) -> Result<Storage, String> {
    match kind {
        StorageKind::Local => local_storage(),
        StorageKind::Session => session_storage(),
    }
}
