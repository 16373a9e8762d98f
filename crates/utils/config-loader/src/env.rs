use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum Env {
    Development,
    Staging,
    Production,
    Unknown(String),
}

impl Env {
    pub fn is_production(&self) -> bool {
        matches!(self, Env::Production)
    }
}

impl From<String> for Env {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "sit" => Env::Development,
            "staging" | "stg" => Env::Staging,
            "production" | "prod" => Env::Production,
            other => Env::Unknown(other.to_string()),
        }
    }
}

impl From<Env> for String {
    fn from(value: Env) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Env::Development => write!(f, "development"),
            Env::Staging => write!(f, "staging"),
            Env::Production => write!(f, "production"),
            Env::Unknown(other) => write!(f, "{}", other),
        }
    }
}
