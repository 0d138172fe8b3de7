//! SessionStart hook: reset statusline state so a new session starts with
//! no stale prompt and no stale git cache.

use crate::state::StateStore;

pub fn clear_state(store: &StateStore) {
    store.clear();
}
