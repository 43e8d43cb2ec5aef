//! Credential persistence
//!
//! The session store holds the one bearer credential the console uses. It is
//! read once when the dashboard shell starts and written once per login.

use crate::config::Config;
use std::fmt;
use std::path::PathBuf;

/// An opaque bearer token. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, rejecting the empty string.
    pub fn parse(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

pub trait SessionStore: Send {
    /// Returns the persisted credential, if any. An unreadable medium counts as absent.
    fn load(&self) -> Option<Credential>;

    /// Persists the credential, replacing any previous one.
    fn save(&mut self, credential: &Credential) -> Result<(), std::io::Error>;
}

/// Stores the credential in the console's JSON config file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Credential> {
        Config::load_from_file(&self.path)
            .ok()
            .and_then(|config| Credential::parse(config.auth_token))
    }

    fn save(&mut self, credential: &Credential) -> Result<(), std::io::Error> {
        Config::new(credential.as_str().to_string()).save(&self.path)
    }
}

/// Keeps the credential in memory only.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    credential: Option<Credential>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Credential> {
        self.credential.clone()
    }

    fn save(&mut self, credential: &Credential) -> Result<(), std::io::Error> {
        self.credential = Some(credential.clone());
        Ok(())
    }
}
