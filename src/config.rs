use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use fortnite_api::Language;
use serde::Deserialize;
use std::{
    borrow::Cow,
    collections::HashMap,
};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// The api key, needed for stats
    key: Option<String>,

    /// The default language
    #[serde(default)]
    language: Language,

    /// Override the api host
    base_url: Option<String>,

    /// A dir to also write logs to
    log_dir: Option<Utf8PathBuf>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn log_dir(&self) -> Option<&Utf8Path> {
        self.log_dir.as_deref()
    }

    /// Override the key, if one is given.
    pub fn set_key(&mut self, key: Option<String>) {
        if key.is_some() {
            self.key = key;
        }
    }

    /// Override the language, if one is given.
    pub fn set_language(&mut self, language: Option<Language>) {
        if let Some(language) = language {
            self.language = language;
        }
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from '{path}'"))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if self.key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::EmptyKey,
            });
        }

        if let Some(base_url) = self.base_url.as_deref() {
            if url::Url::parse(base_url).is_err() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::InvalidBaseUrl,
                });
            }
        }

        for key in self.extra.keys() {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.clone().into()),
            });
        }

        errors
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    EmptyKey,
    InvalidBaseUrl,
    UnknownKey(Cow<'static, str>),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyKey => write!(f, "Empty Api Key"),
            ValidationError::InvalidBaseUrl => write!(f, "Invalid Base Url"),
            ValidationError::UnknownKey(key) => write!(f, "Unknown Key `{key}`"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}
