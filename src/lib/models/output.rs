use serde_derive::{Deserialize, Serialize};

use crate::modules::nfdr::constants::{ADFM_INIT, FFM_INIT};

/// OutputElement holds the seven daily fire danger indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputElement {
    /// Drying Factor [0-7]
    pub df: f64,
    /// Fine Fuel Moisture [%]
    pub ffm: f64,
    /// Adjusted (10-day lag) Fuel Moisture [%]
    pub adfm: f64,
    /// Grass Spread Index
    pub grass: f64,
    /// Timber Spread Index
    pub timber: f64,
    /// Fire Load Rating (man-hour base)
    pub fload: f64,
    /// Build Up Index (today's)
    pub bui: f64,
}

impl Default for OutputElement {
    fn default() -> Self {
        Self {
            df: 0.0,
            ffm: FFM_INIT,
            adfm: ADFM_INIT,
            grass: 0.0,
            timber: 0.0,
            fload: 0.0,
            bui: 0.0,
        }
    }
}
