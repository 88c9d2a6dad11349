//! Local-storage persistence of the employee session.

use gloo::storage::{LocalStorage, Storage};
use shared::session::STORAGE_KEY;
use shared::{Session, StoredUser};

const COMPONENT: &str = "storage";

/// Session restored from the previous visit, if any. Malformed and admin
/// entries are discarded.
pub fn load_session() -> Option<Session> {
    match LocalStorage::get::<StoredUser>(STORAGE_KEY) {
        Ok(stored) => Session::rehydrate(stored),
        Err(e) => {
            log::debug!(target: COMPONENT, "no stored session: {}", e);
            None
        }
    }
}

/// Persist an employee session. Admin sessions are never written.
pub fn save_session(session: &Session) {
    let Some(stored) = session.to_stored() else {
        return;
    };
    if let Err(e) = LocalStorage::set(STORAGE_KEY, &stored) {
        log::warn!(target: COMPONENT, "failed to persist session: {}", e);
    }
}

pub fn clear_session() {
    LocalStorage::delete(STORAGE_KEY);
}
