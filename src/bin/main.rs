use std::env::{set_var, var};
use std::process::exit;

use clap::Parser;
use log::{error, info};

use nfdr::models::input::{HerbStage, InputElement};
use nfdr::modules::nfdr::config::NFDRModelConfig;
use nfdr::modules::nfdr::functions::get_output_fn;
use nfdr::version::LONG_VERSION;

#[derive(Parser, Debug)]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "National Fire Danger Rating System indexes calculator",
    long_about = "Computes the daily National Fire Danger Rating indexes (drying factor, \
fine fuel moisture, adjusted fuel moisture, grass and timber spread indexes, fire load \
rating and build up index) from one day of weather observations."
)]
struct Args {
    #[arg(long, default_value_t = 32.0, help = "Dry bulb temperature [°F]")]
    dry_bulb_temp: f64,

    #[arg(long, default_value_t = 12.0, help = "Wet bulb temperature [°F]")]
    wet_bulb_temp: f64,

    #[arg(long, help = "Snow on the ground")]
    snow: bool,

    #[arg(
        long,
        default_value_t = 0.5,
        help = "Precipitation in the past 24 hours [in]"
    )]
    precipitation: f64,

    #[arg(long, default_value_t = 20.0, help = "Wind speed [mph]")]
    wind_speed: f64,

    #[arg(long, default_value_t = 2.0, help = "Yesterday's build up index")]
    previous_bui: f64,

    #[arg(
        long,
        default_value = "cured",
        help = "Herb stage: cured, transition or green"
    )]
    herb_stage: HerbStage,

    #[arg(
        long,
        default_value = "legacy",
        help = "Model version: legacy (no input checks) or strict"
    )]
    model_version: String,

    #[arg(long, help = "Print the output as JSON")]
    json: bool,
}

fn main() {
    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    let args = Args::parse();

    let input = InputElement {
        dry_bulb_temp: args.dry_bulb_temp,
        wet_bulb_temp: args.wet_bulb_temp,
        is_snow_covered: args.snow,
        precipitation: args.precipitation,
        wind_speed: args.wind_speed,
        previous_bui: args.previous_bui,
        herb_stage: i32::from(args.herb_stage),
    };

    let config = NFDRModelConfig::new(&args.model_version);
    info!(
        "Computing fire danger indexes, model version '{}'",
        config.model_version
    );

    if let Err(err) = config.validate(&input) {
        error!("Invalid input: {}", err);
        exit(1);
    }

    let output = get_output_fn(&input);

    if args.json {
        let json = serde_json::to_string_pretty(&output).expect("Could not serialize output");
        println!("{}", json);
    } else {
        println!("The Drying Factor is: {}", output.df);
        println!("The Fine Fuel Moisture is: {}", output.ffm);
        println!("The Adjusted (10-day lag) Fuel Moisture is: {}", output.adfm);
        println!("The Grass Spread Index is: {}", output.grass);
        println!("The Timber Spread Index is: {}", output.timber);
        println!("The Fire Load Rating (man-hour base) is: {}", output.fload);
        println!("The Build Up Index is: {}", output.bui);
    }
}
