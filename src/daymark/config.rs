use crate::error::{DaymarkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "daymark.json";

// The stock choice list. The store itself never checks a choice against
// this; the list only feeds the `choices` command and shell completion of
// taste.
const DEFAULT_CHOICES: &[&str] = &[
    "Butter Pecan",
    "Andes Mint Avalanche",
    "Dark Chocolate Decadence",
    "Caramel Fudge Cookie Dough",
    "Oreo Cookie Overload",
    "Georgia Peach",
    "Caramel Cashew",
    "Really Reese's",
    "Caramel Chocolate Pecan",
    "Chocolate Covered Strawberry",
    "Mint Cookie",
    "Chocolate Heath Crunch",
    "Double Strawberry",
    "Chocolate Caramel Twist",
    "Devil's Food Cake",
    "Caramel Peanut Buttercup",
    "Chocolate Volcano",
    "Caramel Pecan",
    "Crazy for Cookie Dough",
    "Snickers Swirl",
    "Salted Double Caramel Pecan",
    "Mint Explosion",
    "Turtle",
    "Dark Chocolate PB Crunch",
    "Oreo Cookie Cheesecake",
    "Caramel Turtle",
    "Turtle Cheesecake",
];

/// Configuration for daymark, stored in daymark.json next to the data file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaymarkConfig {
    /// Labels offered when assigning a day (any other string is still
    /// accepted by the store)
    #[serde(default = "default_choices")]
    pub choices: Vec<String>,
}

fn default_choices() -> Vec<String> {
    DEFAULT_CHOICES.iter().map(|c| c.to_string()).collect()
}

impl Default for DaymarkConfig {
    fn default() -> Self {
        Self {
            choices: default_choices(),
        }
    }
}

impl DaymarkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DaymarkError::Io)?;
        let config: DaymarkConfig =
            serde_json::from_str(&content).map_err(DaymarkError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DaymarkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DaymarkError::Serialization)?;
        fs::write(config_path, content).map_err(DaymarkError::Io)?;
        Ok(())
    }
}
