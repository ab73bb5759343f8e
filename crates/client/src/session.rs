use std::{
    fs,
    path::{Path, PathBuf},
};

use api_types::auth::{AuthSession, UserProfile};
use serde::{Deserialize, Serialize};

use crate::credentials::CredentialProvider;
use crate::error::Result;

const DEFAULT_SESSION_PATH: &str = "config/session.json";

/// Persisted authentication state: the bearer token plus the user blob that
/// came with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl From<&AuthSession> for Session {
    fn from(auth: &AuthSession) -> Self {
        Self {
            token: auth.token.clone(),
            user: auth.profile(),
        }
    }
}

/// File-backed session storage.
///
/// Written by the auth flow on login/register, cleared on logout. The
/// gateway only ever reads it, through [`CredentialProvider`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored session. A missing file means "not logged in".
    pub fn load(&self) -> Result<Option<Session>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl CredentialProvider for SessionStore {
    fn token(&self) -> Option<String> {
        match self.load() {
            Ok(session) => session.map(|session| session.token),
            Err(err) => {
                tracing::warn!("failed to load session: {err}");
                None
            }
        }
    }
}

pub fn default_session_path() -> &'static str {
    DEFAULT_SESSION_PATH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> SessionStore {
        let path = std::env::temp_dir().join(format!(
            "monedero_session_{tag}_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        SessionStore::new(path)
    }

    fn sample_session() -> Session {
        Session {
            token: "abc123".to_string(),
            user: UserProfile {
                id: 1,
                email: "a@b.com".to_string(),
                name: "Ana".to_string(),
                username: "ana".to_string(),
            },
        }
    }

    #[test]
    fn missing_file_loads_as_no_session() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "abc123");
        assert_eq!(loaded.user, sample_session().user);
        assert_eq!(store.token(), Some("abc123".to_string()));
        store.clear().unwrap();
    }

    #[test]
    fn clear_removes_the_file_and_is_idempotent() {
        let store = temp_store("clear");
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }
}
