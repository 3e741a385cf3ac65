// Configuration type definitions

use serde::Deserialize;

fn default_debounce_ms() -> u64 {
    300
}

fn default_blur_grace_ms() -> u64 {
    200
}

fn default_visible_rows() -> u16 {
    4
}

fn default_results_field() -> String {
    "results".to_string()
}

fn default_query_param() -> String {
    "q".to_string()
}

/// Controller timing and presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    /// Quiet period after the last keystroke before a lookup fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Delay between losing focus and closing the dropdown
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    /// Rows shown by the dropdown before it scrolls
    #[serde(default = "default_visible_rows")]
    pub visible_rows: u16,
    /// Name of the field that wraps the candidate array in lookup responses
    #[serde(default = "default_results_field")]
    pub results_field: String,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: default_debounce_ms(),
            blur_grace_ms: default_blur_grace_ms(),
            visible_rows: default_visible_rows(),
            results_field: default_results_field(),
        }
    }
}

/// Lookup endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            url: None,
            query_param: default_query_param(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}
