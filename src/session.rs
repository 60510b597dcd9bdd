use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::RwLock,
};
use thiserror::Error;

/// Storage key the session marker is persisted under.
pub const SESSION_KEY: &str = "admin";

/// SessionMarker
///
/// Opaque record whose presence means "an administrator is logged in".
/// Never `null`: a stored `null` is read back as no marker at all.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionMarker(Value);

impl SessionMarker {
    /// Wraps a JSON value. Returns `None` for `null`.
    pub fn new(value: Value) -> Option<Self> {
        (!value.is_null()).then_some(Self(value))
    }

    /// Parses a stored string. `"null"` and malformed JSON both yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::new(value),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unparseable session marker");
                None
            }
        }
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Typed view of the marker, when it has the login response shape.
    pub fn admin(&self) -> Option<AdminSession> {
        serde_json::from_value(self.0.clone()).ok()
    }
}

impl From<AdminSession> for SessionMarker {
    fn from(admin: AdminSession) -> Self {
        // A struct always serializes to an object, never null.
        Self(serde_json::to_value(admin).unwrap_or_else(|_| Value::Object(Map::new())))
    }
}

/// AdminSession
///
/// The body `/admins/login` answers with, which the login page stores as the
/// marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// SessionStore
///
/// Where the guard looks up the marker. `get` is the only call made during
/// navigation; `set` and `clear` back the login and logout flows.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<SessionMarker>;
    fn set(&self, marker: SessionMarker) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// MemorySessionStore
///
/// Process-local store.
#[derive(Default)]
pub struct MemorySessionStore {
    marker: RwLock<Option<SessionMarker>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(marker: SessionMarker) -> Self {
        Self {
            marker: RwLock::new(Some(marker)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionMarker> {
        self.marker.read().ok().and_then(|marker| marker.clone())
    }

    fn set(&self, marker: SessionMarker) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.marker.write() {
            *slot = Some(marker);
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.marker.write() {
            *slot = None;
        }
        Ok(())
    }
}

/// FileSessionStore
///
/// Local-storage stand-in backed by a JSON object file. Like browser storage,
/// every value is a string; the marker is the JSON text stored under
/// `SESSION_KEY`. Other keys in the file are preserved on write.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<SessionMarker> {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session storage unreadable");
                return None;
            }
        };

        match entries.get(SESSION_KEY)? {
            Value::String(raw) => SessionMarker::parse(raw),
            _ => {
                tracing::warn!(key = SESSION_KEY, "session entry is not a string");
                None
            }
        }
    }

    fn set(&self, marker: SessionMarker) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        entries.insert(
            SESSION_KEY.to_string(),
            Value::String(marker.value().to_string()),
        );
        self.write_entries(&entries)?;
        tracing::info!(path = %self.path.display(), "session marker stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;
        if entries.remove(SESSION_KEY).is_some() {
            self.write_entries(&entries)?;
            tracing::info!(path = %self.path.display(), "session marker removed");
        }
        Ok(())
    }
}
