use crate::helpers::NFDRError;
use crate::models::{input::InputElement, output::OutputElement};

use super::{constants::*, models::FireDangerState};

// FFM MODULE
// The wet bulb depression selects which pair of piecewise regression
// coefficients (A, B) is used.
pub fn fine_fuel_moisture(
    dry_bulb_temp: f64, // dry bulb temperature [°F]
    wet_bulb_temp: f64, // wet bulb temperature [°F]
) -> f64 {
    let diff = dry_bulb_temp - wet_bulb_temp;
    let (a, b) = if diff < FFM_COEFF_C[0] {
        (FFM_COEFF_A[0], FFM_COEFF_B[0])
    } else if diff < FFM_COEFF_C[1] {
        (FFM_COEFF_A[1], FFM_COEFF_B[1])
    } else if diff < FFM_COEFF_C[2] {
        (FFM_COEFF_A[2], FFM_COEFF_B[2])
    } else {
        (FFM_COEFF_A[3], FFM_COEFF_B[3])
    };
    b * f64::exp(a) * diff
}

// DF MODULE
// Scan the D thresholds in order; the first one exceeded by the fine fuel
// moisture fixes the drying factor.
pub fn drying_factor(ffm: f64) -> f64 {
    for i in 1..=DF_COEFF_D.len() {
        if ffm - DF_COEFF_D[i - 1] > 0.0 {
            return (i - 1) as f64;
        }
    }
    DF_MAX
}

/// Adjust the fine fuel moisture for the herb stage: 5% is added for each
/// stage above cured. Values at or below 1% are floored to 1% regardless
/// of the stage.
pub fn herb_adjustment(
    ffm: f64,        // fine fuel moisture [%]
    herb_stage: i32, // 1=cured, 2=transition, 3=green
) -> f64 {
    if ffm <= FFM_MIN {
        FFM_MIN
    } else {
        ffm + f64::from(herb_stage - 1) * FFM_HERB_STEP
    }
}

// BUI MODULE
// Rain above 0.1 inches reduces yesterday's build up; the sign structure
// of the original tables is kept as-is for output parity.
pub fn rain_effect_on_bui(
    bui: f64,           // today's build up index
    buo: f64,           // yesterday's build up index
    precipitation: f64, // rain in the past 24 hours [in]
) -> f64 {
    if precipitation > BUI_MIN_RAIN {
        let mut bui_new = -BUI_B1
            * (f64::ln(1.0 - (-1.0 * f64::exp(buo / BUI_B1))) * f64::exp(BUI_B2) * precipitation);
        // clip to positive values
        if bui_new < 0.0 {
            bui_new = 0.0;
        }
        return bui_new;
    }
    bui
}

// ADFM MODULE
pub fn adjusted_fuel_moisture(
    ffm: f64, // fine fuel moisture [%]
    bui: f64, // today's build up index
) -> f64 {
    ADFM_A1 * ffm + ADFM_A2 + ADFM_A3 * f64::exp(-1.0 * bui / BUI_B1)
}

// SPREAD MODULE
// When both fuel moistures are at or above 30% the fuels are too wet to
// carry fire and both indexes are pinned at 1. Otherwise the indexes come
// from the wind regressions. NOTE: the low-wind regression overwrites the
// high-wind one unless both indexes already exceed 99; the historical
// tables behave this way, so the control structure is kept literally even
// though it looks like a missing else.
pub fn adjust_spread_indexes(
    state: &mut FireDangerState,
    wind_speed: f64, // wind speed [mph]
) {
    if state.adfm >= SPREAD_WET_FUEL && state.ffm >= SPREAD_WET_FUEL {
        state.grass = 1.0;
        state.timber = 1.0;
    } else {
        if wind_speed >= SPREAD_HIGH_WIND && state.grass <= 0.0 && state.timber < SPREAD_MAX {
            state.grass =
                SPREAD_W1 * (wind_speed + SPREAD_W2) * (SPREAD_A1 - state.adfm) * SPREAD_A2
                    - SPREAD_A3;
            state.timber =
                SPREAD_W1 * (wind_speed + SPREAD_W2) * (SPREAD_A1 - state.adfm) * SPREAD_A2
                    - SPREAD_A3;
        }
        if state.grass > SPREAD_MAX && state.timber > SPREAD_MAX {
            state.grass = SPREAD_MAX;
            state.timber = SPREAD_MAX;
        } else {
            state.grass =
                SPREAD_L1 * (wind_speed + SPREAD_L2) * (SPREAD_A1 - state.adfm) * SPREAD_A2
                    - SPREAD_A3;
            state.timber =
                SPREAD_L1 * (wind_speed + SPREAD_L2) * (SPREAD_A1 - state.adfm) * SPREAD_A2
                    - SPREAD_A3;
        }
        if state.timber <= 0.0 {
            state.timber = 1.0;
        }
        if state.grass < 0.0 {
            state.grass = 1.0;
        }
    }
}

// FLOAD MODULE
pub fn fire_load_rating(
    timber: f64, // timber spread index
    bui: f64,    // today's build up index
) -> f64 {
    if timber > 0.0 && bui > 0.0 {
        let mut fload = FLOAD_F1 * f64::log10(timber) + FLOAD_F2 * f64::log10(bui) - FLOAD_F3;
        if fload < 0.0 {
            fload = 0.0;
        } else {
            fload *= FLOAD_SCALE;
        }
        fload
    } else {
        0.0
    }
}

// VALIDATION
// The legacy tables never reject an input; out-of-range values flow
// through the arithmetic and may produce non-finite results.
pub fn validate_legacy(_input: &InputElement) -> Result<(), NFDRError> {
    Ok(())
}

pub fn validate_strict(input: &InputElement) -> Result<(), NFDRError> {
    if input.precipitation < 0.0 {
        return Err(format!("negative precipitation: {}", input.precipitation).into());
    }
    if input.wind_speed < 0.0 {
        return Err(format!("negative wind speed: {}", input.wind_speed).into());
    }
    if !(1..=3).contains(&input.herb_stage) {
        return Err(format!("herb stage out of range: {}", input.herb_stage).into());
    }
    Ok(())
}

// COMPUTE OUTPUTS
/// Run the full daily pipeline on one observation and return the seven
/// indexes. Pure: a fresh state is created per call and nothing outlives
/// the evaluation.
pub fn get_output_fn(input: &InputElement) -> OutputElement {
    let mut state = FireDangerState::new(input.previous_bui);

    if input.is_snow_covered {
        // with snow on the ground nothing spreads; only the build up is
        // corrected for rain
        state.grass = 0.0;
        state.timber = 0.0;
        state.bui = rain_effect_on_bui(state.bui, state.buo, input.precipitation);
    } else {
        state.ffm = fine_fuel_moisture(input.dry_bulb_temp, input.wet_bulb_temp);
        state.df = drying_factor(state.ffm);
        state.ffm = herb_adjustment(state.ffm, input.herb_stage);
        state.bui = rain_effect_on_bui(state.bui, state.buo, input.precipitation);
        // the drying correction replaces the rain correction
        state.bui = state.buo + state.df;
        state.adfm = adjusted_fuel_moisture(state.ffm, state.bui);
        adjust_spread_indexes(&mut state, input.wind_speed);
        if state.timber > 0.0 && state.bui > 0.0 {
            state.fload = fire_load_rating(state.timber, state.bui);
        }
    }

    state.into_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn reference_input() -> InputElement {
        InputElement {
            dry_bulb_temp: 32.0,
            wet_bulb_temp: 12.0,
            is_snow_covered: false,
            precipitation: 0.5,
            wind_speed: 20.0,
            previous_bui: 2.0,
            herb_stage: 1,
        }
    }

    #[test]
    fn reference_scenario() {
        let output = get_output_fn(&reference_input());
        assert_eq!(output.df, 0.0);
        assert!((output.ffm - 260.015401478568).abs() < TOL);
        assert!((output.adfm - 243.641361002659).abs() < TOL);
        assert_eq!(output.grass, 1.0);
        assert_eq!(output.timber, 1.0);
        // 1.75*log10(1) + 0.32*log10(2) - 1.640 is negative
        assert_eq!(output.fload, 0.0);
        assert_eq!(output.bui, 2.0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = get_output_fn(&reference_input());
        let second = get_output_fn(&reference_input());
        assert_eq!(first.df.to_bits(), second.df.to_bits());
        assert_eq!(first.ffm.to_bits(), second.ffm.to_bits());
        assert_eq!(first.adfm.to_bits(), second.adfm.to_bits());
        assert_eq!(first.grass.to_bits(), second.grass.to_bits());
        assert_eq!(first.timber.to_bits(), second.timber.to_bits());
        assert_eq!(first.fload.to_bits(), second.fload.to_bits());
        assert_eq!(first.bui.to_bits(), second.bui.to_bits());
    }

    #[test]
    fn evaluation_does_not_mutate_input() {
        let input = reference_input();
        let before = input.clone();
        let _ = get_output_fn(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn snow_zeroes_spread_indexes() {
        let mut input = reference_input();
        input.is_snow_covered = true;
        input.precipitation = 0.05;
        let output = get_output_fn(&input);
        assert_eq!(output.grass, 0.0);
        assert_eq!(output.timber, 0.0);
        // with no rain correction the build up keeps its initial value
        assert_eq!(output.bui, 0.0);
        // the rest of the pipeline never runs
        assert_eq!(output.df, 0.0);
        assert_eq!(output.ffm, 99.0);
        assert_eq!(output.adfm, 99.0);
        assert_eq!(output.fload, 0.0);
    }

    #[test]
    fn snow_with_rain_floors_build_up() {
        let mut input = reference_input();
        input.is_snow_covered = true;
        // the rain correction is negative for any positive build up and
        // gets floored
        let output = get_output_fn(&input);
        assert_eq!(output.bui, 0.0);
    }

    #[test]
    fn fine_fuel_moisture_selects_coefficients_by_depression() {
        // one sample per depression class
        assert!((fine_fuel_moisture(33.0, 32.0) - 30.0 * f64::exp(-0.1859)).abs() < TOL);
        assert!((fine_fuel_moisture(70.0, 62.0) - 65.062726049534).abs() < TOL);
        assert!((fine_fuel_moisture(32.0, 12.0) - 260.015401478568).abs() < TOL);
        assert!((fine_fuel_moisture(100.0, 70.0) - 22.5 * f64::exp(-0.077373) * 30.0).abs() < TOL);
    }

    #[test]
    fn drying_factor_table_scan() {
        assert_eq!(drying_factor(20.0), 0.0);
        assert_eq!(drying_factor(12.0), 1.0);
        assert_eq!(drying_factor(8.0), 2.0);
        assert_eq!(drying_factor(6.0), 3.0);
        assert_eq!(drying_factor(4.5), 4.0);
        assert_eq!(drying_factor(3.5), 5.0);
        // at or below the last threshold the factor jumps to 7
        assert_eq!(drying_factor(3.0), 7.0);
        assert_eq!(drying_factor(0.0), 7.0);
    }

    #[test]
    fn drying_factor_stays_in_range() {
        let mut ffm = 0.0;
        while ffm < 120.0 {
            let df = drying_factor(ffm);
            assert!((0.0..=7.0).contains(&df));
            ffm += 0.25;
        }
    }

    #[test]
    fn herb_adjustment_adds_five_per_stage() {
        assert_eq!(herb_adjustment(10.0, 1), 10.0);
        assert_eq!(herb_adjustment(10.0, 2), 15.0);
        assert_eq!(herb_adjustment(10.0, 3), 20.0);
    }

    #[test]
    fn herb_floor_wins_over_stage() {
        // zero depression gives ffm = 0, floored to 1 for every stage
        for herb_stage in 1..=3 {
            let mut input = reference_input();
            input.dry_bulb_temp = 50.0;
            input.wet_bulb_temp = 50.0;
            input.precipitation = 0.0;
            input.herb_stage = herb_stage;
            let output = get_output_fn(&input);
            assert_eq!(output.ffm, 1.0);
        }
    }

    #[test]
    fn rain_effect_requires_more_than_a_tenth_of_an_inch() {
        assert_eq!(rain_effect_on_bui(0.0, 2.0, 0.1), 0.0);
        assert_eq!(rain_effect_on_bui(5.0, 2.0, 0.05), 5.0);
    }

    #[test]
    fn rain_effect_is_floored_at_zero() {
        assert_eq!(rain_effect_on_bui(0.0, 2.0, 0.5), 0.0);
    }

    #[test]
    fn low_wind_regression_overwrites_high_wind_one() {
        // zero depression floors ffm to 1, df = 7, bui = 100 + 7
        let input = InputElement {
            dry_bulb_temp: 50.0,
            wet_bulb_temp: 50.0,
            is_snow_covered: false,
            precipitation: 0.0,
            wind_speed: 30.0,
            previous_bui: 100.0,
            herb_stage: 1,
        };
        let output = get_output_fn(&input);
        assert_eq!(output.df, 7.0);
        assert_eq!(output.bui, 107.0);
        assert!((output.adfm - 2.517721008707).abs() < TOL);
        // the high-wind regression gives 17.315463514769 here but the
        // low-wind one replaces it
        assert!((output.grass - 20.755693521726).abs() < TOL);
        assert!((output.timber - 20.755693521726).abs() < TOL);
        assert!((output.fload - 13.143929951065).abs() < TOL);
    }

    #[test]
    fn extreme_wind_clamps_both_indexes() {
        // the only path where the high-wind regression survives is when it
        // pushes both indexes beyond 99
        let input = InputElement {
            dry_bulb_temp: 50.0,
            wet_bulb_temp: 50.0,
            is_snow_covered: false,
            precipitation: 0.0,
            wind_speed: 250.0,
            previous_bui: 100.0,
            herb_stage: 1,
        };
        let output = get_output_fn(&input);
        assert_eq!(output.grass, 99.0);
        assert_eq!(output.timber, 99.0);
        assert!((output.fload - 25.017643994050).abs() < TOL);
    }

    #[test]
    fn spread_indexes_floored_at_one() {
        // low wind and damp fuels push the regression negative
        let input = InputElement {
            dry_bulb_temp: 33.0,
            wet_bulb_temp: 32.0,
            is_snow_covered: false,
            precipitation: 0.0,
            wind_speed: 5.0,
            previous_bui: 10.0,
            herb_stage: 1,
        };
        let output = get_output_fn(&input);
        assert!((output.ffm - 24.910698794788).abs() < TOL);
        assert!((output.adfm - 30.697571069550).abs() < TOL);
        assert_eq!(output.grass, 1.0);
        assert_eq!(output.timber, 1.0);
        // timber = 1 and bui = 10 leave the rating negative, hence zero
        assert_eq!(output.fload, 0.0);
    }

    #[test]
    fn wet_fuels_pin_spread_indexes_at_one() {
        let output = get_output_fn(&reference_input());
        assert_eq!(output.grass, 1.0);
        assert_eq!(output.timber, 1.0);
    }

    #[test]
    fn fire_load_zero_when_timber_and_build_up_are_zero() {
        assert_eq!(fire_load_rating(0.0, 0.0), 0.0);
    }

    #[test]
    fn fire_load_scales_positive_ratings_by_ten() {
        assert!((fire_load_rating(20.755693521726, 107.0) - 13.143929951065).abs() < TOL);
    }

    #[test]
    fn fire_load_negative_ratings_are_zero() {
        assert_eq!(fire_load_rating(1.0, 2.0), 0.0);
    }

    #[test]
    fn strict_validation_rejects_out_of_range_inputs() {
        let mut input = reference_input();
        input.precipitation = -0.5;
        assert!(validate_strict(&input).is_err());

        let mut input = reference_input();
        input.wind_speed = -1.0;
        assert!(validate_strict(&input).is_err());

        let mut input = reference_input();
        input.herb_stage = 0;
        assert!(validate_strict(&input).is_err());

        assert!(validate_strict(&reference_input()).is_ok());
    }

    #[test]
    fn legacy_validation_accepts_anything() {
        let mut input = reference_input();
        input.precipitation = -0.5;
        input.wind_speed = -1.0;
        input.herb_stage = 9;
        assert!(validate_legacy(&input).is_ok());
    }
}
