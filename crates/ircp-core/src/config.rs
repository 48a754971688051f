use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context, Result};
use ircp_memory::{FileHashSlot, HashSlot, MemoryHashSlot, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "ircp.yaml";

/// `suggestions.hash_slot` value that keeps the last hash in memory only.
pub const MEMORY_SLOT: &str = "memory";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    #[serde(default)]
    pub env: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "ircp".to_string(),
            env: String::new(),
        }
    }
}

fn default_output_dir() -> String {
    "exports".to_string()
}

fn default_file_prefix() -> String {
    "IRCP".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_hash_slot() -> String {
    MEMORY_SLOT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    /// `memory`, or a file path (relative paths are under the config root).
    #[serde(default = "default_hash_slot")]
    pub hash_slot: String,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            hash_slot: default_hash_slot(),
        }
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_history_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IrcpConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl IrcpConfig {
    pub fn export_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.export.output_dir)
    }

    pub fn hash_slot(&self, root: &Path) -> Arc<dyn HashSlot> {
        let raw = self.suggestions.hash_slot.trim();
        if raw.eq_ignore_ascii_case(MEMORY_SLOT) {
            Arc::new(MemoryHashSlot::new())
        } else {
            Arc::new(FileHashSlot::new(root.join(raw)))
        }
    }
}

pub fn resolve_env_var(raw: &str) -> String {
    let mut output = String::new();
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);

        let candidate = &rest[start + 2..];
        let Some(end) = candidate.find('}') else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &candidate[..end];
        output.push_str(&std::env::var(key).unwrap_or_default());
        rest = &candidate[end + 1..];
    }

    output.push_str(rest);
    output
}

/// Load `<dir>/ircp.yaml`, expanding `${VAR}` placeholders, then validate.
pub fn load_config(dir: &Path) -> Result<IrcpConfig> {
    let mut config: IrcpConfig = read_yaml_file(&dir.join(CONFIG_FILE))?;
    resolve_config_env(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(dir: &Path) -> Result<IrcpConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(IrcpConfig::default());
    }
    load_config(dir)
}

pub fn validate_config(config: &IrcpConfig) -> Result<()> {
    if config.app.name.trim().is_empty() {
        return Err(anyhow!("app.name must not be empty"));
    }

    let prefix = &config.export.file_prefix;
    if prefix.is_empty()
        || !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(anyhow!("invalid export.file_prefix: {prefix:?}"));
    }

    if config.export.output_dir.trim().is_empty() {
        return Err(anyhow!("export.output_dir must not be empty"));
    }

    if config.suggestions.hash_slot.trim().is_empty() {
        return Err(anyhow!(
            "suggestions.hash_slot must be `{MEMORY_SLOT}` or a file path"
        ));
    }

    if config.history.limit == 0 {
        return Err(anyhow!("history.limit must be at least 1"));
    }

    Ok(())
}

fn read_yaml_file<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse yaml file: {}", path.display()))
}

fn resolve_config_env(config: &mut IrcpConfig) {
    config.app.name = resolve_env_var(&config.app.name);
    config.app.env = resolve_env_var(&config.app.env);
    config.export.output_dir = resolve_env_var(&config.export.output_dir);
    config.suggestions.hash_slot = resolve_env_var(&config.suggestions.hash_slot);
}
