//! Gemini API key lookup.
//!
//! The key is read from the environment first (`GEMINI_API_KEY`, then
//! `API_KEY`) and falls back to the OS keyring.

use crate::error::{ConfigError, CredentialError};

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

const API_KEY_ENTRY: &str = "gemini_api_key";

/// Thin wrapper around the OS keyring for credential storage.
pub mod keyring_store {
    use crate::error::CredentialError;

    const SERVICE: &str = "greenpantry";

    pub fn get(key: &str) -> Result<Option<String>, CredentialError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), CredentialError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), CredentialError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Where an API key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Env(&'static str),
    Keyring,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySource::Env(var) => write!(f, "environment ({var})"),
            KeySource::Keyring => write!(f, "OS keyring"),
        }
    }
}

/// Pick the first non-blank key from `env`, then `keyring`.
///
/// A keyring failure is logged and treated as "no key".
pub fn lookup_api_key<E, K>(env: E, keyring: K) -> Option<(String, KeySource)>
where
    E: Fn(&str) -> Option<String>,
    K: FnOnce() -> Result<Option<String>, CredentialError>,
{
    let non_blank = |v: String| {
        let v = v.trim().to_string();
        (!v.is_empty()).then_some(v)
    };

    for &var in API_KEY_ENV_VARS {
        if let Some(key) = env(var).and_then(non_blank) {
            return Some((key, KeySource::Env(var)));
        }
    }

    match keyring() {
        Ok(stored) => stored.and_then(non_blank).map(|key| (key, KeySource::Keyring)),
        Err(e) => {
            tracing::warn!(error = %e, "could not read API key from keyring");
            None
        }
    }
}

/// Resolve the API key from the process environment and the OS keyring.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] when no source has a key.
pub fn api_key() -> Result<(String, KeySource), ConfigError> {
    lookup_api_key(
        |var| std::env::var(var).ok(),
        || keyring_store::get(API_KEY_ENTRY),
    )
    .ok_or(ConfigError::MissingApiKey)
}

/// Store the API key in the OS keyring.
pub fn store_api_key(key: &str) -> Result<(), CredentialError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CredentialError::Empty("API key"));
    }
    keyring_store::set(API_KEY_ENTRY, key)
}

/// Remove the API key from the OS keyring. Succeeds if none was stored.
pub fn clear_api_key() -> Result<(), CredentialError> {
    keyring_store::delete(API_KEY_ENTRY)
}
