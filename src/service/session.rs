use dashmap::DashMap;
use rand::RngCore;
use std::sync::Arc;

/// Process-wide map from session id to customer id. Insert and lookup only;
/// sessions live until the process exits.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a session for `customer_id` and returns its identifier.
    pub fn create(&self, customer_id: &str) -> String {
        let session_id = mint_session_id();
        self.insert(&session_id, customer_id);
        session_id
    }

    pub fn insert(&self, session_id: &str, customer_id: &str) {
        self.inner.insert(session_id.to_string(), customer_id.to_string());
    }

    pub fn customer_for(&self, session_id: &str) -> Option<String> {
        self.inner.get(session_id).map(|c| c.value().clone())
    }

    pub fn active_count(&self) -> usize {
        self.inner.len()
    }
}

fn mint_session_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
