use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// InputElement represents one day of weather observations for the model.
/// The herb stage is kept as a plain integer so that the legacy model
/// version accepts out-of-range values the way the original tables did;
/// the strict model version rejects them (config.rs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputElement {
    /// dry bulb temperature [°F]
    pub dry_bulb_temp: f64,
    /// wet bulb temperature [°F]
    pub wet_bulb_temp: f64,
    /// snow on the ground
    pub is_snow_covered: bool,
    /// cumulated precipitation in the past 24 hours [in]
    pub precipitation: f64,
    /// wind speed [mph]
    pub wind_speed: f64,
    /// yesterday's build up index
    pub previous_bui: f64,
    /// herb stage: 1=cured, 2=transition, 3=green
    pub herb_stage: i32,
}

/// Vegetation greenness state.
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum HerbStage {
    /// cured/dry vegetation
    Cured,
    /// curing in progress
    Transition,
    /// green vegetation
    Green,
}

impl From<HerbStage> for i32 {
    fn from(stage: HerbStage) -> i32 {
        match stage {
            HerbStage::Cured => 1,
            HerbStage::Transition => 2,
            HerbStage::Green => 3,
        }
    }
}
