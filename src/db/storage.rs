use anyhow::{Context, Result};
use std::cell::RefCell;

use crate::models::ProfileState;

use super::Database;

/// Key under which the whole profile state is stored.
pub const STATE_KEY: &str = "cycle-storage";

/// Durable home for the serialized [`ProfileState`].
pub trait Storage {
    /// Read the stored state; `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<ProfileState>>;

    /// Replace the stored state.
    fn save(&self, state: &ProfileState) -> Result<()>;
}

impl Storage for Database {
    fn load(&self) -> Result<Option<ProfileState>> {
        let Some(blob) = self.get_blob(STATE_KEY)? else {
            return Ok(None);
        };
        let state = serde_json::from_str(&blob)
            .with_context(|| format!("stored state under '{STATE_KEY}' is not valid JSON"))?;
        Ok(Some(state))
    }

    fn save(&self, state: &ProfileState) -> Result<()> {
        let blob = serde_json::to_string(state)?;
        self.put_blob(STATE_KEY, &blob)?;
        tracing::debug!(bytes = blob.len(), "profile state persisted");
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load(&self) -> Result<Option<ProfileState>> {
        (**self).load()
    }

    fn save(&self, state: &ProfileState) -> Result<()> {
        (**self).save(state)
    }
}

/// Keeps the serialized blob in memory. Goes through JSON like the real
/// storage so round-trip behavior matches.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON last written, if any.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<ProfileState>> {
        match self.blob.borrow().as_deref() {
            Some(b) => Ok(Some(serde_json::from_str(b)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &ProfileState) -> Result<()> {
        *self.blob.borrow_mut() = Some(serde_json::to_string(state)?);
        Ok(())
    }
}
