// SPDX-License-Identifier: MPL-2.0
//! Where the settings file lives.
//!
//! The first match wins:
//! 1. an explicit override passed to [`config_dir_with_override`] (tests)
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`]
//! 3. the `ICED_LIGHTBOX_CONFIG_DIR` environment variable, when non-empty
//! 4. `<platform config dir>/IcedLightbox` from the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "IcedLightbox";

/// Environment variable that relocates the settings directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LIGHTBOX_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` value. Only the first call has any effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

/// Settings directory resolved from CLI, environment and platform.
///
/// `None` only when the platform has no config directory and nothing
/// overrides it.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_DIR_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // The process environment is shared between test threads
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/srv/lightbox/settings");
        assert_eq!(config_dir_with_override(Some(custom.clone())), Some(custom));
    }

    #[test]
    fn environment_variable_relocates_settings() {
        let _guard = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/lightbox-env");

        assert_eq!(config_dir(), Some(PathBuf::from("/tmp/lightbox-env")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_environment_variable_is_ignored() {
        let _guard = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = config_dir() {
            assert!(path.ends_with(APP_DIR_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
