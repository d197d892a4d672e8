use crate::models::output::OutputElement;

use super::constants::*;

// STATE
/// Mutable record threaded through one evaluation of the model.
/// Created fresh for every call, never shared across evaluations.
#[derive(Debug)]
pub struct FireDangerState {
    /// Drying Factor
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
    /// Build Up Index (yesterday's)
    pub buo: f64,
}

impl FireDangerState {
    /// Create a new state from yesterday's build up index.
    pub fn new(previous_bui: f64) -> FireDangerState {
        FireDangerState {
            df: 0.0,
            ffm: FFM_INIT,
            adfm: ADFM_INIT,
            grass: 0.0,
            timber: 0.0,
            fload: 0.0,
            bui: 0.0,
            buo: previous_bui,
        }
    }

    pub fn into_output(self) -> OutputElement {
        OutputElement {
            df: self.df,
            ffm: self.ffm,
            adfm: self.adfm,
            grass: self.grass,
            timber: self.timber,
            fload: self.fload,
            bui: self.bui,
        }
    }
}
