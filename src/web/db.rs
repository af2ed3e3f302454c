use crate::board::Board;
use crate::game::ScoreRecord;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Per-player state carried between requests: the board the player is
/// currently solving and their running score record.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub board: Option<Board>,
    pub record: ScoreRecord,
}

/// In-memory session store keyed by session id. Cheap to clone into
/// handlers; all clones share the same map.
#[derive(Clone)]
pub struct InMemSessionStore {
    db: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemSessionStore {
    pub fn new() -> Self {
        InMemSessionStore {
            db: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, sess_id: &str) -> Option<Session> {
        let reader = self.db.read().await;
        (*reader).get(sess_id).cloned()
    }

    pub async fn insert(&self, sess_id: &str, session: Session) {
        let mut writer = self.db.write().await;
        (*writer).insert(String::from(sess_id), session);
    }

    pub async fn drop_session(&self, sess_id: &str) {
        let mut writer = self.db.write().await;
        (*writer).remove(sess_id);
    }

    pub async fn num_sessions(&self) -> usize {
        let reader = self.db.read().await;
        (*reader).len()
    }
}
