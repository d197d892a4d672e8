// Table values used in computing the danger ratings, taken from the
// historical NFDRS tables.

/// Initial Fine Fuel Moisture [%]
pub const FFM_INIT: f64 = 99.0;
/// Initial Adjusted Fuel Moisture [%]
pub const ADFM_INIT: f64 = 99.0;

// FFM CONSTANTS
// A and B are piecewise regression coefficients selected by the wet bulb
// depression (dry bulb - wet bulb), C holds the depression breakpoints.
pub const FFM_COEFF_A: [f64; 4] = [-0.1859, -0.859, -0.05966, -0.077373];
pub const FFM_COEFF_B: [f64; 4] = [30.0, 19.2, 13.8, 22.5];
pub const FFM_COEFF_C: [f64; 3] = [4.5, 12.5, 27.5];
/// Lower bound for the fine fuel moisture [%]
pub const FFM_MIN: f64 = 1.0;
/// Added to ffm for each herb stage above cured [%]
pub const FFM_HERB_STEP: f64 = 5.0;

// DF CONSTANTS
// Fine fuel moisture thresholds, scanned in order; the first one exceeded
// fixes the drying factor.
pub const DF_COEFF_D: [f64; 6] = [16.0, 10.0, 7.0, 5.0, 4.0, 3.0];
/// Drying factor when no threshold is exceeded
pub const DF_MAX: f64 = 7.0;

// BUI CONSTANTS
/// Daily cumulated rain above which the build up is reduced [in]
pub const BUI_MIN_RAIN: f64 = 0.1;
/// Decay scale of the build up index
pub const BUI_B1: f64 = 50.0;
/// Rain effect exponent
pub const BUI_B2: f64 = 1.175;

// ADFM CONSTANTS
pub const ADFM_A1: f64 = 0.9;
pub const ADFM_A2: f64 = 0.5;
pub const ADFM_A3: f64 = 9.5;

// SPREAD INDEX CONSTANTS
/// Fuel moisture [%] above which fire is considered unable to spread
pub const SPREAD_WET_FUEL: f64 = 30.0;
/// Wind speed [mph] selecting the high-wind regression
pub const SPREAD_HIGH_WIND: f64 = 14.0;
/// Upper bound of the spread indexes
pub const SPREAD_MAX: f64 = 99.0;
// high-wind regression
pub const SPREAD_W1: f64 = 0.00918;
pub const SPREAD_W2: f64 = 14.0;
// low-wind regression
pub const SPREAD_L1: f64 = 0.01312;
pub const SPREAD_L2: f64 = 6.0;
// common terms of both regressions
pub const SPREAD_A1: f64 = 33.0;
pub const SPREAD_A2: f64 = 1.65;
pub const SPREAD_A3: f64 = 3.0;

// FLOAD CONSTANTS
pub const FLOAD_F1: f64 = 1.75;
pub const FLOAD_F2: f64 = 0.32;
pub const FLOAD_F3: f64 = 1.640;
pub const FLOAD_SCALE: f64 = 10.0;
