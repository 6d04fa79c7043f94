//! # Test Harness
//!
//! Provides utilities for integration testing uuid62 without touching the user's
//! configuration. Uses thread-local storage instead of environment variables to
//! redirect the home directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use uuid62::set_home_override;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests read and write config files.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Returns true while some `TestEnv` holds the test lock.
pub fn test_lock_held() -> bool {
    TEST_LOCK.try_lock().is_err()
}

/// The 64-symbol URL-safe alphabet used throughout the tests.
pub const BASE64_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/uuid62/config)
    pub home_dir: TempDir,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment and redirects config lookups to it.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("uuid62")
            .join("config")
    }

    /// Creates the config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Reads the config file content.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Builder for config file content.
#[derive(Default)]
pub struct ConfigBuilder {
    alphabet: Option<String>,
    length: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = Some(alphabet.to_string());
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn build(&self) -> String {
        let mut content = String::from("# uuid62 test config\n");
        if let Some(alphabet) = &self.alphabet {
            content.push_str(&format!("alphabet = \"{alphabet}\"\n"));
        }
        if let Some(length) = self.length {
            content.push_str(&format!("length = {length}\n"));
        }
        content
    }
}
