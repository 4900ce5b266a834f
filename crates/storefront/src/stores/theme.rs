//! The persistent dark/light theme store.

use tokio::sync::RwLock;

use crate::storage::{Storage, StorageError, keys};

/// Theme token written to storage.
const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Holds the stored theme preference, if the visitor has ever set one.
///
/// The effective theme for a request resolves in precedence order: stored
/// preference, else the platform preference carried by the
/// `Sec-CH-Prefers-Color-Scheme` client hint, else light.
#[derive(Debug)]
pub struct ThemeStore {
    storage: Storage,
    preference: RwLock<Option<bool>>,
}

impl ThemeStore {
    /// Load the stored preference, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read (absence is not an error).
    pub async fn load(storage: Storage) -> Result<Self, StorageError> {
        let preference = storage
            .get_json::<String>(keys::THEME)
            .await?
            .map(|token| token == DARK);

        Ok(Self {
            storage,
            preference: RwLock::new(preference),
        })
    }

    /// The stored preference; `None` means the visitor has never chosen.
    pub async fn preference(&self) -> Option<bool> {
        *self.preference.read().await
    }

    /// Resolve the effective dark flag given the platform preference.
    pub async fn effective_dark(&self, platform_dark: bool) -> bool {
        self.preference().await.unwrap_or(platform_dark)
    }

    /// Set the theme explicitly and persist the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through persist fails.
    pub async fn set_dark(&self, value: bool) -> Result<bool, StorageError> {
        let mut preference = self.preference.write().await;
        *preference = Some(value);
        let token = if value { DARK } else { LIGHT };
        self.storage.put_json(keys::THEME, &token).await?;
        Ok(value)
    }

    /// Flip the effective theme and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through persist fails.
    pub async fn toggle(&self, platform_dark: bool) -> Result<bool, StorageError> {
        let current = self.effective_dark(platform_dark).await;
        self.set_dark(!current).await
    }
}
