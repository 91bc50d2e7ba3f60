use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use tracing::warn;

pub const DEFAULT_SETTINGS_FILE: &str = "page.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogConflictPolicy {
    /// A request made while another dialog is pending is refused.
    #[default]
    Reject,
    /// Requests wait in arrival order and are presented one at a time.
    Queue,
}

impl DialogConflictPolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "queue" => Some(Self::Queue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub drag_source_id: String,
    pub drop_target_id: String,
    pub drag_item_name: String,
    pub alert_message: String,
    pub confirm_message: String,
    pub confirm_cancelled_message: String,
    pub child_page_url: String,
    pub child_page_title: String,
    pub dialog_conflict_policy: DialogConflictPolicy,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            drag_source_id: "drag-card".into(),
            drop_target_id: "drop-target".into(),
            drag_item_name: "card".into(),
            alert_message: "This is a native alert from the test page.".into(),
            confirm_message: "Do you want to continue?".into(),
            confirm_cancelled_message: "User cancelled the confirmation.".into(),
            child_page_url: "child.html".into(),
            child_page_title: "Example Child Page".into(),
            dialog_conflict_policy: DialogConflictPolicy::Reject,
        }
    }
}

/// Defaults, then `page.toml` in the working directory, then `APP__*` env vars.
pub fn load_settings() -> PageSettings {
    let mut settings = PageSettings::default();

    match load_settings_file(Path::new(DEFAULT_SETTINGS_FILE)) {
        Ok(Some(file_cfg)) => apply_overrides(&mut settings, |key| file_cfg.get(key).cloned()),
        Ok(None) => {}
        Err(error) => warn!(%error, "ignoring unreadable settings file"),
    }

    apply_env_overrides(&mut settings);
    settings
}

/// Like [`load_settings`] but with an explicit file that must exist.
pub fn load_settings_from(path: &Path) -> anyhow::Result<PageSettings> {
    let mut settings = PageSettings::default();
    let file_cfg = load_settings_file(path)?
        .with_context(|| format!("settings file '{}' not found", path.display()))?;
    apply_overrides(&mut settings, |key| file_cfg.get(key).cloned());
    apply_env_overrides(&mut settings);
    Ok(settings)
}

fn load_settings_file(path: &Path) -> anyhow::Result<Option<HashMap<String, String>>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let parsed = toml::from_str::<HashMap<String, String>>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    Ok(Some(parsed))
}

fn apply_env_overrides(settings: &mut PageSettings) {
    apply_overrides(settings, |key| {
        std::env::var(format!("APP__{}", key.to_ascii_uppercase())).ok()
    });
}

pub(crate) fn apply_overrides(
    settings: &mut PageSettings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = lookup("drag_source_id") {
        settings.drag_source_id = v;
    }
    if let Some(v) = lookup("drop_target_id") {
        settings.drop_target_id = v;
    }
    if let Some(v) = lookup("drag_item_name") {
        settings.drag_item_name = v;
    }
    if let Some(v) = lookup("alert_message") {
        settings.alert_message = v;
    }
    if let Some(v) = lookup("confirm_message") {
        settings.confirm_message = v;
    }
    if let Some(v) = lookup("confirm_cancelled_message") {
        settings.confirm_cancelled_message = v;
    }
    if let Some(v) = lookup("child_page_url") {
        settings.child_page_url = v;
    }
    if let Some(v) = lookup("child_page_title") {
        settings.child_page_title = v;
    }
    if let Some(v) = lookup("dialog_conflict_policy") {
        match DialogConflictPolicy::parse(&v) {
            Some(policy) => settings.dialog_conflict_policy = policy,
            None => warn!(value = %v, "unknown dialog_conflict_policy; keeping default"),
        }
    }
}
