use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use review_lift::domain::{project, CalcError, FunnelParams, FunnelPreset, RatingQuery};
use review_lift::util::format::{format_count, format_currency, format_rating};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    /// ~100 views per review, 2% conversion (default)
    Standard,
    /// ~50 views per review, 2% conversion
    Conservative,
}

impl From<PresetArg> for FunnelPreset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::Standard => FunnelPreset::Standard,
            PresetArg::Conservative => FunnelPreset::Conservative,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "review-lift-cli")]
#[command(about = "How many 5-star reviews to reach a target rating, and what they are worth", long_about = None)]
#[command(version, allow_negative_numbers = true)]
struct Cli {
    /// Current average rating (1.0 - 5.0)
    #[arg(long)]
    current_rating: f64,

    /// Number of reviews the current rating is based on
    #[arg(long)]
    total_reviews: i64,

    /// Desired average rating (up to 5.0)
    #[arg(long)]
    target_rating: f64,

    /// Revenue one customer brings over the relationship
    #[arg(long)]
    lifetime_value: f64,

    /// Funnel preset used for the revenue projection
    #[arg(long, value_enum, default_value = "standard")]
    preset: PresetArg,

    /// Override the preset's monthly views per review
    #[arg(long, env = "REVIEW_LIFT_VIEWS_PER_REVIEW")]
    views_per_review: Option<f64>,

    /// Override the preset's conversion rate (0.0 - 1.0)
    #[arg(long, env = "REVIEW_LIFT_CONVERSION_RATE")]
    conversion_rate: Option<f64>,

    /// Print a JSON object instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    additional_reviews: u64,
    projected_monthly_revenue: f64,
    views_per_review: f64,
    conversion_rate: f64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<String, CalcError> {
    let total_reviews = u32::try_from(cli.total_reviews)
        .map_err(|_| CalcError::invalid_input("total reviews", "must be between 1 and 4294967295"))?;
    let query = RatingQuery::new(cli.current_rating, total_reviews, cli.target_rating);
    let funnel = funnel_for(cli);
    log::debug!("Resolved funnel {funnel:?} from {:?}", cli.preset);

    let projection = project(&query, cli.lifetime_value, &funnel)?;

    if cli.json {
        let report = Report {
            additional_reviews: projection.additional_reviews,
            projected_monthly_revenue: projection.projected_monthly_revenue,
            views_per_review: funnel.views_per_review,
            conversion_rate: funnel.conversion_rate,
        };
        return serde_json::to_string_pretty(&report)
            .map_err(|err| CalcError::invalid_input("output", err.to_string()));
    }

    Ok(format!(
        "Reviews needed to reach {}: {} more 5-star reviews\nEstimated monthly revenue increase: {}",
        format_rating(cli.target_rating),
        format_count(projection.additional_reviews),
        format_currency(projection.projected_monthly_revenue)
    ))
}

fn funnel_for(cli: &Cli) -> FunnelParams {
    let base = FunnelPreset::from(cli.preset)
        .params()
        .unwrap_or_default();
    FunnelParams::new(
        cli.views_per_review.unwrap_or(base.views_per_review),
        cli.conversion_rate.unwrap_or(base.conversion_rate),
    )
}

/// Clap reports malformed flags with 2, so calculation errors start at 3.
fn exit_code(err: &CalcError) -> u8 {
    match err {
        CalcError::InvalidTarget { .. } => 3,
        CalcError::InvalidInput { .. } => 4,
    }
}
