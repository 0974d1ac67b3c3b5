use crate::render::{self, OutputFormat};
use casgo_engine::config::AppConfig;
use casgo_engine::engine::{AdvisorService, RecommendationEngine};
use casgo_engine::error::AppError;
use casgo_engine::profile::BusinessProfile;
use casgo_engine::reference::ReferenceData;
use casgo_engine::telemetry;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "casgo",
    about = "Rank and financially score sustainability interventions for a business",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank recommendations for a business profile
    Recommend(RecommendArgs),
    /// Break down the finances of one catalog rule for a business profile
    Analyze(AnalyzeArgs),
    /// Report current energy costs, emissions and solar potential
    Baseline(ProfileArgs),
    /// Look up incentive programs for an intervention category
    Incentives(IncentiveArgs),
    /// List the advisory templates
    Templates(FormatArgs),
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Path to a JSON business profile
    #[arg(long)]
    profile: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    #[command(flatten)]
    profile: ProfileArgs,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    profile: ProfileArgs,
    /// Catalog rule id, e.g. led_retrofit_basic
    #[arg(long)]
    rule: String,
}

#[derive(Args, Debug)]
struct IncentiveArgs {
    /// Intervention category matched against eligibility tags (e.g. solar, hvac)
    #[arg(long)]
    category: String,
    /// Implementation cost in dollars
    #[arg(long)]
    cost: f64,
    /// Free-form location, e.g. "San Diego, California"
    #[arg(long)]
    location: String,
    /// Drop programs that expired before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct FormatArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let reference = Arc::new(ReferenceData::standard());
    let engine = Arc::new(RecommendationEngine::new(reference, config.engine));
    info!(?config.environment, "casgo engine ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Recommend(args) => {
            let profile = load_profile(&args.profile.profile)?;
            let advice = AdvisorService::new(engine).advise(&profile)?;
            render::advice(&mut out, &advice, args.profile.format)
        }
        Command::Analyze(args) => {
            let profile = load_profile(&args.profile.profile)?;
            let analysis = engine.analyze(&profile, &args.rule)?;
            render::analysis(&mut out, &analysis, args.profile.format)
        }
        Command::Baseline(args) => {
            let profile = load_profile(&args.profile)?;
            let baseline = engine.baseline(&profile)?;
            render::baseline(&mut out, &baseline, args.format)
        }
        Command::Incentives(args) => {
            let calculator = engine.calculator();
            let summary = match args.as_of {
                Some(as_of) => calculator.optimize_incentives_as_of(
                    &args.category,
                    args.cost,
                    &args.location,
                    as_of,
                )?,
                None => calculator.optimize_incentives(&args.category, args.cost, &args.location)?,
            };
            render::incentives(&mut out, &summary, args.format)
        }
        Command::Templates(args) => {
            render::templates(&mut out, &engine.templates().list_templates(), args.format)
        }
    }
}

fn load_profile(path: &Path) -> Result<BusinessProfile, AppError> {
    let file = File::open(path)?;
    let profile = serde_json::from_reader(BufReader::new(file))?;
    Ok(profile)
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_incentive_lookup() {
        let cli = Cli::try_parse_from([
            "casgo",
            "incentives",
            "--category",
            "solar",
            "--cost",
            "25000",
            "--location",
            "Austin, Texas",
            "--as-of",
            "2025-01-01",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Incentives(args) => {
                assert_eq!(args.category, "solar");
                assert_eq!(args.cost, 25_000.0);
                assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2025, 1, 1));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected incentives command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        let error = parse_date("01/02/2025").expect_err("not ISO formatted");
        assert!(error.contains("YYYY-MM-DD"));
    }

    #[test]
    fn loads_camel_case_profile_from_disk() {
        let path = std::env::temp_dir().join(format!("casgo-profile-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"industry":"Retail","companySize":"small","location":"Ohio","monthlyKwh":1200,"monthlyTherms":40,"goals":["recycling"]}"#,
        )
        .expect("profile written");

        let profile = load_profile(&path).expect("profile loads");
        std::fs::remove_file(&path).ok();
        assert_eq!(profile.monthly_kwh, 1_200.0);
        assert_eq!(profile.goals, vec!["recycling".to_string()]);
    }
}
