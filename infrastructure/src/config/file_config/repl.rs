//! `[repl]` section: interactive shell behaviour

use serde::{Deserialize, Serialize};

/// Shell settings as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Spinner on stderr while a completion is in flight (`--quiet` turns it off too)
    pub show_progress: bool,
    /// Line-editor history file. When unset, history goes to
    /// `ConfigLoader::default_history_path` (`<data dir>/agentic-gemini/history.txt`).
    /// Only used when stdin is a terminal.
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_defaults_to_data_dir() {
        let config: FileReplConfig = toml::from_str("show_progress = false").unwrap();
        assert!(!config.show_progress);
        assert!(config.history_file.is_none());
    }
}
