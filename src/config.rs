//! Configuration: YAML file plus environment overrides.
//!
//! Resolved once at start-up. The time zone and the response table chosen here
//! are handed to the responder; nothing touches the process environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::handlers::{CodeHook, DialogResponder, InvocationContext, DEFAULT_TIME_ZONE};
use crate::queries::ResponseTable;

const TIME_ZONE_ENV: &str = "TAXBOT_TIME_ZONE";
const RESPONSES_ENV: &str = "TAXBOT_RESPONSES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// IANA time zone user requests are interpreted in
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Reported in every invocation context
    #[serde(default = "default_function_name")]
    pub function_name: String,

    /// YAML file of category → answer replacing the built-in table
    #[serde(default)]
    pub responses_path: Option<PathBuf>,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.into()
}

fn default_function_name() -> String {
    "taxbot-router".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            function_name: default_function_name(),
            responses_path: None,
        }
    }
}

impl Config {
    /// Load from `path` (or defaults) and apply `TAXBOT_*` overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        // An empty file means "all defaults"
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply overrides from `lookup`, normally the process environment
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tz) = lookup(TIME_ZONE_ENV).filter(|v| !v.trim().is_empty()) {
            self.time_zone = tz.trim().to_string();
        }
        if let Some(path) = lookup(RESPONSES_ENV).filter(|v| !v.trim().is_empty()) {
            self.responses_path = Some(PathBuf::from(path.trim()));
        }
    }

    /// Response table selected by this config
    pub fn response_table(&self) -> Result<ResponseTable> {
        match &self.responses_path {
            Some(path) => ResponseTable::from_yaml_file(path)
                .with_context(|| format!("loading responses from {}", path.display())),
            None => Ok(ResponseTable::builtin()),
        }
    }

    /// Build the entry point this config describes
    pub fn build_code_hook(&self) -> Result<CodeHook<ResponseTable>> {
        let responses = Arc::new(self.response_table()?);
        Ok(CodeHook::new(DialogResponder::new(
            responses,
            self.time_zone.clone(),
        )))
    }

    /// Fresh context for one invocation
    pub fn invocation_context(&self) -> InvocationContext {
        InvocationContext::new(self.function_name.clone(), self.time_zone.clone())
    }
}
