use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LoggerConfig {
    pub max_level: String,
    /// Emit ANSI colors on stdout.
    pub ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_level: "INFO".to_string(),
            ansi: true,
        }
    }
}
