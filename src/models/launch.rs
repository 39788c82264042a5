use serde::{Deserialize, Serialize};

/// Sentinel dropdown value meaning "no site filter". It is a UI placeholder,
/// never a value that appears in the data.
pub const ALL_SITES: &str = "All";

/// A single launch attempt, projected from the source CSV to the four columns
/// the dashboard uses.
///
/// The serde renames match the CSV header, so deserializing through the csv
/// reader performs the column projection: columns not named here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Categorical location identifier for the launch.
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass: f64,
    /// Booster hardware generation.
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// Binary outcome: 1 for success, 0 for failure.
    #[serde(rename = "class")]
    pub outcome: u8,
}

impl LaunchRecord {
    /// Convenience constructor, mainly for tests and fixtures.
    pub fn new(site: &str, payload_mass: f64, booster: &str, outcome: u8) -> Self {
        Self {
            launch_site: site.to_string(),
            payload_mass,
            booster_version_category: booster.to_string(),
            outcome,
        }
    }
}
