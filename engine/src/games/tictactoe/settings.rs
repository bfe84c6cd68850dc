use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use super::types::{Difficulty, GameSetup, Mark};

const SETTINGS_FILE_NAME: &str = "tictactoe_settings.yaml";
const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 10_000;

/// Settings file next to the running executable, or in the working
/// directory when that cannot be resolved.
pub fn get_settings_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(SETTINGS_FILE_NAME);
    }
    PathBuf::from(SETTINGS_FILE_NAME)
}

pub fn get_settings_manager()
-> ConfigManager<FileContentConfigProvider, SessionSettings, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(get_settings_path())
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct SessionSettings {
    pub human_mark: Mark,
    pub vs_computer: bool,
    pub difficulty: Difficulty,
    /// Pause the presentation layer should leave before asking for the
    /// computer's move. The engine itself never waits.
    #[serde(default = "default_computer_move_delay_ms")]
    pub computer_move_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_computer_move_delay_ms() -> u64 {
    500
}

impl SessionSettings {
    pub fn setup(&self) -> GameSetup {
        GameSetup {
            human_mark: self.human_mark,
            vs_computer: self.vs_computer,
            difficulty: self.difficulty,
        }
    }

    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {} (got {})",
                MAX_COMPUTER_MOVE_DELAY_MS, self.computer_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            vs_computer: true,
            difficulty: Difficulty::Hard,
            computer_move_delay_ms: default_computer_move_delay_ms(),
            seed: None,
        }
    }
}
