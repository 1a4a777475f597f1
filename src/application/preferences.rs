//! Shared sportsbook preferences with change notification.

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use crate::domain::{error::DomainError, sportsbook};

/// User display preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Sportsbook ids shown and requested, in display order.
    pub sportsbooks: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sportsbooks: sportsbook::DEFAULT_SELECTION
                .iter()
                .map(|key| (*key).to_string())
                .collect(),
        }
    }
}

/// Injected preference store. Subscribers are notified on every change.
#[derive(Debug)]
pub struct PreferenceStore {
    current: RwLock<Preferences>,
    notify: watch::Sender<Preferences>,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(preferences: Preferences) -> Self {
        let (notify, _) = watch::channel(preferences.clone());
        Self {
            current: RwLock::new(preferences),
            notify,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Preferences {
        self.current.read().clone()
    }

    #[must_use]
    pub fn sportsbooks(&self) -> Vec<String> {
        self.current.read().sportsbooks.clone()
    }

    /// Receiver that observes every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.notify.subscribe()
    }

    /// Replace the sportsbook selection. Unknown ids are rejected and
    /// duplicates collapsed. Returns whether the selection changed.
    pub fn set_sportsbooks(&self, keys: Vec<String>) -> Result<bool, DomainError> {
        sportsbook::validate_selection(&keys)?;
        let mut unique: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }

        let updated = {
            let mut current = self.current.write();
            if current.sportsbooks == unique {
                return Ok(false);
            }
            current.sportsbooks = unique;
            current.clone()
        };
        debug!(sportsbooks = ?updated.sportsbooks, "Sportsbook selection changed");
        self.notify.send_replace(updated);
        Ok(true)
    }

    /// Add or remove one sportsbook. Returns whether it is now selected.
    pub fn toggle(&self, key: &str) -> Result<bool, DomainError> {
        let mut keys = self.sportsbooks();
        let now_selected = match keys.iter().position(|k| k == key) {
            Some(index) => {
                keys.remove(index);
                false
            }
            None => {
                keys.push(key.to_string());
                true
            }
        };
        self.set_sportsbooks(keys)?;
        Ok(now_selected)
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}
