// ABOUTME: Style target abstraction for custom-property writes on the document root
// ABOUTME: Tracks which engine session wrote last so sessions do not clobber each other

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one palette engine session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

impl SessionId {
    /// Allocate a process-unique session id
    pub fn next() -> Self {
        Self(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Process-wide sink for CSS custom properties.
///
/// Writes are last-write-wins; implementations record the session behind the
/// most recent write.
pub trait StyleTarget: Send + Sync + fmt::Debug {
    fn set_property(&self, session: SessionId, name: &str, value: &str);

    fn property(&self, name: &str) -> Option<String>;

    fn last_writer(&self) -> Option<SessionId>;
}

#[derive(Debug, Default)]
struct StyleState {
    properties: BTreeMap<String, String>,
    last_writer: Option<SessionId>,
    writes: u64,
}

/// In-memory document root style
#[derive(Debug, Default)]
pub struct DocumentStyle {
    state: RwLock<StyleState>,
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every property currently set
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.state.read().properties.clone()
    }

    /// Total number of property writes
    pub fn write_count(&self) -> u64 {
        self.state.read().writes
    }
}

impl StyleTarget for DocumentStyle {
    fn set_property(&self, session: SessionId, name: &str, value: &str) {
        let mut state = self.state.write();
        state.properties.insert(name.to_string(), value.to_string());
        state.last_writer = Some(session);
        state.writes += 1;
    }

    fn property(&self, name: &str) -> Option<String> {
        self.state.read().properties.get(name).cloned()
    }

    fn last_writer(&self) -> Option<SessionId> {
        self.state.read().last_writer
    }
}
