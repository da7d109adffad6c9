//! Configuration schema for the Mindful engine.

use serde::{Deserialize, Serialize};

/// Root config for the Mindful engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MindfulConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub completion: CompletionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl MindfulConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> MindfulConfigBuilder {
        MindfulConfigBuilder::new()
    }
}

/// Builder for assembling a `MindfulConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct MindfulConfigBuilder {
    config: MindfulConfig,
}

impl MindfulConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: MindfulConfig::default(),
        }
    }

    /// Replace the completion configuration.
    pub fn completion(mut self, completion: CompletionConfig) -> Self {
        self.config.completion = completion;
        self
    }

    /// Replace the storage configuration.
    pub fn storage(mut self, storage: StorageConfig) -> Self {
        self.config.storage = storage;
        self
    }

    /// Finalize and return the built `MindfulConfig`.
    pub fn build(self) -> MindfulConfig {
        self.config
    }
}

/// Which completion implementation to construct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Canned local replies, no network or credential.
    #[default]
    Scripted,
    /// Live HTTP completion service.
    Live,
}

/// Completion client configuration.
///
/// Endpoint, credential, and generation parameters are fixed at
/// construction; nothing here is renegotiated per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_reply_tokens")]
    pub max_reply_tokens: u32,
    /// Credential injected by the caller or the environment. Never written
    /// back out when the config is serialized.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_reply_tokens: default_max_reply_tokens(),
            api_key: None,
        }
    }
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_reply_tokens() -> u32 {
    300
}

/// File blob store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Root directory for stored documents; defaults under the home dir.
    #[serde(default)]
    pub path: Option<String>,
}
