use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::errors::{AuditError, Result};

/// File name of the audit log under the content directory.
pub const DEFAULT_LOG_FILE: &str = "wordpane-audit.log";

/// Optional site configuration file, read from the working directory.
pub const CONFIG_FILE: &str = "wordpane.toml";

/// Resolved audit configuration.
///
/// Sources, strongest first: explicit override (CLI flag or env),
/// `wordpane.toml` `[audit]` section, built-in defaults. The config file
/// is optional; a site that never wrote one gets the defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Content-storage root the log file lives under.
    pub content_dir: PathBuf,
    pub log_file: String,
}

/// On-disk shape of `wordpane.toml`.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    audit: Option<AuditSection>,
}

/// The `[audit]` section.
#[derive(Debug, Deserialize)]
struct AuditSection {
    content_dir: Option<PathBuf>,
    log_file: Option<String>,
}

impl AppConfig {
    /// Load the configuration, applying `content_dir_override` on top of
    /// whatever `wordpane.toml` provides.
    ///
    /// The log file name is validated to be a plain file name so a
    /// tampered config cannot point appends outside the content root.
    pub fn load(content_dir_override: Option<&Path>) -> Result<Self> {
        let raw = if Path::new(CONFIG_FILE).exists() {
            let content = std::fs::read_to_string(CONFIG_FILE)?;
            toml::from_str::<RawConfig>(&content).map_err(|e| AuditError::InvalidConfig {
                detail: format!("Failed to parse {CONFIG_FILE}: {e}"),
            })?
        } else {
            RawConfig::default()
        };

        let audit = raw.audit;
        let content_dir = content_dir_override
            .map(Path::to_path_buf)
            .or_else(|| audit.as_ref().and_then(|a| a.content_dir.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let log_file = audit
            .and_then(|a| a.log_file)
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        if log_file.is_empty() || log_file.contains(['/', '\\']) || log_file.contains("..") {
            return Err(AuditError::InvalidConfig {
                detail: format!("audit log_file must be a plain file name, got: {log_file}"),
            });
        }

        Ok(Self {
            content_dir,
            log_file,
        })
    }

    /// Full path of the audit log file.
    pub fn log_path(&self) -> PathBuf {
        self.content_dir.join(&self.log_file)
    }
}
