use crate::prelude::*;

/// mode-specific section of the settings menu
pub trait GameModeSettings: Send + Sync {
    /// section header
    fn title(&self) -> &'static str;

    /// rows to show, in order. the client maps these onto its own menu
    /// elements
    fn items(&self) -> Vec<SettingsItem>;
}

/// renderer-agnostic description of one settings row
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsItem {
    Checkbox {
        label: &'static str,
        value: bool,
    },
    Slider {
        label: &'static str,
        value: f64,
        range: Range<f64>,
    },
    KeyBind {
        label: &'static str,
        key: String,
    },
}
