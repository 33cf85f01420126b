//! Export configuration.

use serde::{Deserialize, Serialize};

/// Bulk export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Optional path to an `.xlsx` file used as the container template.
    /// The built-in template is used when unset.
    #[serde(default)]
    pub xlsx_template: Option<String>,
    /// Number of rows buffered between the database reader and the encoder.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Prefix of the generated attachment file name.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            xlsx_template: None,
            channel_capacity: default_channel_capacity(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_channel_capacity() -> usize {
    256
}

fn default_file_prefix() -> String {
    "actors".to_string()
}
