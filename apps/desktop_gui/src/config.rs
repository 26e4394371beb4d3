use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

const LOCAL_CONFIG_FILE: &str = "headcanon.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn with_overrides(mut self, server_url: Option<String>, log_filter: Option<String>) -> Self {
        if let Some(v) = server_url.filter(|v| !v.trim().is_empty()) {
            self.server_url = v;
        }
        if let Some(v) = log_filter.filter(|v| !v.trim().is_empty()) {
            self.log_filter = v;
        }
        self
    }
}

/// Defaults, then the first config file found, then environment overrides.
/// An explicitly requested file must exist; the default locations are optional.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match explicit_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            for path in default_config_paths() {
                if let Ok(raw) = fs::read_to_string(&path) {
                    if let Err(err) = apply_file(&mut settings, &raw) {
                        eprintln!("ignoring invalid config file '{}': {err}", path.display());
                    }
                    break;
                }
            }
        }
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("headcanon").join("settings.toml"));
    }
    paths
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("server_url") {
        settings.server_url = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("HEADCANON_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = non_empty("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = non_empty("HEADCANON_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = non_empty("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}
