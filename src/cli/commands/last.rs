use std::path::Path;

use crate::adapters::log::tailer::{self, Tail};
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Execute `wordpane-audit last [N]`.
///
/// "No log yet" and "log is empty" are advisory states, not failures;
/// both exit successfully. Lines are printed verbatim, never decoded, so
/// malformed historical lines stay readable.
pub fn execute(n: Option<i64>, content_dir: Option<&str>) -> Result<()> {
    let config = AppConfig::load(content_dir.map(Path::new))?;
    let log_path = config.log_path();

    match tailer::tail(&log_path, n.unwrap_or(tailer::DEFAULT_LINES))? {
        Tail::Absent => {
            output::warning(&format!(
                "Audit log does not exist yet: {}",
                log_path.display()
            ));
        }
        Tail::Lines(lines) if lines.is_empty() => {
            output::log("Audit log is empty.");
        }
        Tail::Lines(lines) => {
            for line in &lines {
                output::log(line);
            }
        }
    }

    Ok(())
}
