use bmi_form::bmi::{self, BmiError, UnitSystem};
use bmi_form::config::Config;
use bmi_form::form::{FieldId, FormController, FormEvent, MemoryView};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "bmi-form")]
#[command(about = "BMI calculator with metric and imperial input", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the rendered form as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate from centimeters and kilograms
    Metric {
        /// Height in centimeters
        #[arg(long, default_value = "")]
        height: String,

        /// Weight in kilograms
        #[arg(long, default_value = "")]
        weight: String,
    },

    /// Calculate from feet/inches and stone/pounds
    Imperial {
        #[arg(long, default_value = "")]
        feet: String,

        #[arg(long, default_value = "")]
        inches: String,

        #[arg(long, default_value = "")]
        stone: String,

        #[arg(long, default_value = "")]
        pounds: String,
    },

    /// Show the classification for a BMI value
    Classify {
        /// BMI value
        #[arg(allow_negative_numbers = true)]
        bmi: f64,
    },

    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), BmiError> {
    let config = match &cli.config {
        Some(path) => {
            debug!("Loading config from {}", path);
            Config::load_from_file(path)?
        }
        None => Config::empty(),
    };

    match cli.command {
        Commands::Metric { height, weight } => fill_form(
            &config,
            UnitSystem::Metric,
            &[(FieldId::HeightCm, height), (FieldId::WeightKg, weight)],
            cli.json,
        ),
        Commands::Imperial {
            feet,
            inches,
            stone,
            pounds,
        } => fill_form(
            &config,
            UnitSystem::Imperial,
            &[
                (FieldId::HeightFt, feet),
                (FieldId::HeightIn, inches),
                (FieldId::WeightSt, stone),
                (FieldId::WeightLb, pounds),
            ],
            cli.json,
        ),
        Commands::Classify { bmi } => {
            classify_value(bmi, cli.json);
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Type each value into a fresh form, in order, and print what the form shows afterwards
fn fill_form(
    config: &Config,
    unit: UnitSystem,
    values: &[(FieldId, String)],
    json: bool,
) -> Result<(), BmiError> {
    let mut form = FormController::new(MemoryView::new(), config.default_unit, config.input_policy);
    form.handle(FormEvent::UnitSelected(unit));
    for (field, value) in values {
        form.handle(FormEvent::FieldChanged(*field, value.clone()));
    }

    let snapshot = form.snapshot();
    let state = form.into_view().state();

    if json {
        #[derive(Serialize)]
        struct Output<'a> {
            unit: UnitSystem,
            display: bmi_form::form::DisplayState,
            view: &'a bmi_form::form::ViewState,
        }

        let output = Output {
            unit: snapshot.unit,
            display: snapshot.display,
            view: &state,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !state.results_visible {
        println!("{}", config.display.welcome_text);
        return Ok(());
    }

    println!("Your BMI is {}", state.bmi.as_deref().unwrap_or_default());
    println!(
        "Your BMI suggests you're {}. Your ideal weight is between {} - {}.",
        state.classification.as_deref().unwrap_or_default(),
        state.range_low.as_deref().unwrap_or_default(),
        state.range_high.as_deref().unwrap_or_default()
    );
    Ok(())
}

fn classify_value(value: f64, json: bool) {
    let classification = bmi::classify(value);
    if json {
        println!(
            "{}",
            serde_json::json!({
                "bmi": bmi::format_one_decimal(value),
                "classification": classification.label(),
            })
        );
    } else {
        println!("{}", classification.label());
    }
}
