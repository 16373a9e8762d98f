use crate::env::Env;
use serde::{Deserialize, Serialize};

/// Identity of the embedding application, consumed by the logger setup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct BaseAppConfig {
    pub name: String,
    pub version: Option<String>,
    pub env: Option<Env>,
    /// Timezone offset in hours from UTC for log timestamps (e.g., 7 for UTC+7)
    pub timezone: Option<i8>,
}

impl BaseAppConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            env: None,
            timezone: None,
        }
    }
}
