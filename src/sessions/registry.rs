use std::collections::HashMap;
use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::sessions::profile::Profile;
use crate::sessions::transcript::Transcript;

/// One user's isolated state: the current profile and the coach transcript.
/// The surrounding mutex serializes all events for the session, so a pending
/// model call blocks further actions on the same session (and only that one).
pub struct Session {
    pub id: Uuid,
    pub created_at: OffsetDateTime,
    pub profile: Profile,
    pub transcript: Transcript,
}

impl Session {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            created_at: OffsetDateTime::now_utc(),
            profile: Profile::default(),
            transcript: Transcript::default(),
        }
    }
}

pub type SessionHandle = Arc<Mutex<Session>>;

/// In-process session registry. Sessions live for the process lifetime and
/// share nothing with each other; the outer lock only guards insert/lookup.
#[derive(Default)]
pub struct SessionRegistry {
    inner: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl SessionRegistry {
    pub async fn create(&self) -> SessionHandle {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(Session::new(id)));
        self.inner.write().await.insert(id, handle.clone());
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.inner.read().await.get(&id).cloned()
    }
}
