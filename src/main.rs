use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use heart_risk::models::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, MajorVessels, ObservationOverrides,
    RestingEcg, Sex, StSlope, Thalassemia,
};
use heart_risk::{ClinicalObservation, PredictionService, PredictorConfig, encode, form, render};
use log::info;

#[derive(Debug, Parser)]
#[command(author, version, about = "Heart disease risk assessment", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Describe the form fields, their bounds and options
    Form {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Assess the risk for one observation
    Predict {
        #[command(flatten)]
        observation: ObservationArgs,
        /// Directory holding the model and scaler artifacts
        #[arg(long, value_name = "DIR")]
        models_dir: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the feature vector of one observation before scaling
    Encode {
        #[command(flatten)]
        observation: ObservationArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

/// Observation fields; unset fields keep the form defaults
#[derive(Debug, Args)]
struct ObservationArgs {
    /// JSON file with observation fields, applied before the flags
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    #[arg(long)]
    age: Option<u16>,
    /// Male or Female
    #[arg(long)]
    sex: Option<Sex>,
    /// Code 0-3 or label, e.g. "Type 2: Angina"
    #[arg(long)]
    chest_pain: Option<ChestPainType>,
    /// mm Hg
    #[arg(long)]
    resting_bp: Option<u16>,
    /// mg/dl
    #[arg(long)]
    cholesterol: Option<u16>,
    /// Fasting blood sugar above 120 mg/dl: True or False
    #[arg(long)]
    fasting_blood_sugar: Option<FastingBloodSugar>,
    #[arg(long)]
    resting_ecg: Option<RestingEcg>,
    #[arg(long)]
    max_heart_rate: Option<u16>,
    /// Yes or No
    #[arg(long)]
    exercise_angina: Option<ExerciseAngina>,
    #[arg(long)]
    st_depression: Option<f64>,
    #[arg(long)]
    st_slope: Option<StSlope>,
    #[arg(long)]
    major_vessels: Option<MajorVessels>,
    /// 1-3
    #[arg(long)]
    thalassemia: Option<Thalassemia>,
}

impl ObservationArgs {
    fn overrides(&self) -> ObservationOverrides {
        ObservationOverrides {
            age: self.age,
            sex: self.sex,
            chest_pain_type: self.chest_pain,
            resting_bp: self.resting_bp,
            cholesterol: self.cholesterol,
            fasting_blood_sugar_high: self.fasting_blood_sugar,
            resting_ecg: self.resting_ecg,
            max_heart_rate: self.max_heart_rate,
            exercise_angina: self.exercise_angina,
            st_depression: self.st_depression,
            st_slope: self.st_slope,
            major_vessels: self.major_vessels,
            thalassemia: self.thalassemia,
        }
    }

    /// Form defaults, then `--input`, then the field flags
    fn build(&self) -> anyhow::Result<ClinicalObservation> {
        let content = match &self.input {
            Some(path) => Some(std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read observation file {}", path.display())
            })?),
            None => None,
        };

        ClinicalObservation::from_layers(content.as_deref(), &self.overrides())
            .context("Observation is outside the form's domain")
    }
}

/// Exit status when the model artifacts could not be loaded
const EXIT_MODELS_UNAVAILABLE: u8 = 2;

fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<u8> {
    match cli.command {
        Commands::Form { format } => {
            let fields = form::fields();
            match format {
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&fields)?)?,
                OutputFormat::Text | OutputFormat::Html => {
                    write!(out, "{}", render::form_text(&fields))?;
                }
            }
        }
        Commands::Encode { observation } => {
            let features = encode(&observation.build()?);
            writeln!(out, "{}", serde_json::to_string(&features)?)?;
        }
        Commands::Predict {
            observation,
            models_dir,
            format,
        } => {
            let observation = observation.build()?;

            let mut config = PredictorConfig::from_env();
            if let Some(dir) = models_dir {
                config = config.with_models_dir(dir);
            }
            info!("Loading model artifacts from: {}", config.models_dir().display());

            let service = PredictionService::initialize(&config);
            if let Some(notice) = service.load_notice() {
                write!(err, "{}", render::notice_text(&notice))?;
                return Ok(EXIT_MODELS_UNAVAILABLE);
            }

            let mut session = service.session();
            let assessment = session
                .submit(&observation)
                .context("Risk assessment failed")?;

            match format {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&assessment)?)?;
                }
                OutputFormat::Html => write!(out, "{}", render::html(session.state()))?,
                OutputFormat::Text => write!(out, "{}", render::text(session.state()))?,
            }
        }
    }
    Ok(0)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let status = run(cli, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(status))
}
