//! Start-up options, resolved once per process.

use std::sync::OnceLock;

use thiserror::Error;
use url::Url;

pub const DEFAULT_BOOKING_URL: &str = "https://tidycal.com/m52nvnm/30-minute-meeting";

pub const EMBED_ENV: &str = "REVIEW_LIFT_EMBED";
pub const BOOKING_URL_ENV: &str = "REVIEW_LIFT_BOOKING_URL";

const EMBED_ARG: &str = "--embed";

static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();
static DEFAULT_BOOKING: OnceLock<Url> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    /// Rendered inside another page: hide header, navigation and footer.
    pub embedded: bool,
    /// Target of the call-to-action button.
    pub booking_url: Url,
}

#[derive(Debug, Error)]
pub enum LaunchConfigError {
    #[error("invalid booking url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("booking url must use http or https, got {0}")]
    UnsupportedScheme(String),
}

impl LaunchConfig {
    pub fn from_env() -> Self {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Builds the config from CLI arguments and an environment lookup.
    ///
    /// `--embed` / `--embed=<bool>` wins over `REVIEW_LIFT_EMBED`. A malformed
    /// booking link falls back to the default with a warning.
    pub fn resolve<I, S, F>(args: I, lookup: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let embedded = embed_flag(args)
            .or_else(|| lookup(EMBED_ENV).map(|value| is_truthy(&value)))
            .unwrap_or(false);

        let booking_url = match lookup(BOOKING_URL_ENV) {
            Some(raw) => parse_booking_url(&raw).unwrap_or_else(|err| {
                log::warn!("Ignoring {BOOKING_URL_ENV}: {err}");
                default_booking_url().clone()
            }),
            None => default_booking_url().clone(),
        };

        Self {
            embedded,
            booking_url,
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            embedded: false,
            booking_url: default_booking_url().clone(),
        }
    }
}

/// Installs the process-wide config. Later calls keep the first value.
pub fn install(config: LaunchConfig) -> &'static LaunchConfig {
    LAUNCH_CONFIG.get_or_init(|| config)
}

pub fn launch_config() -> &'static LaunchConfig {
    LAUNCH_CONFIG.get_or_init(LaunchConfig::from_env)
}

pub fn parse_booking_url(raw: &str) -> Result<Url, LaunchConfigError> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(LaunchConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// The built-in booking link, parsed on first use.
fn default_booking_url() -> &'static Url {
    DEFAULT_BOOKING.get_or_init(|| {
        Url::parse(DEFAULT_BOOKING_URL)
            .unwrap_or_else(|err| panic!("Built-in booking url {DEFAULT_BOOKING_URL} is invalid: {err}"))
    })
}

fn embed_flag<I, S>(args: I) -> Option<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().find_map(|arg| {
        let arg = arg.as_ref();
        if arg == EMBED_ARG {
            Some(true)
        } else {
            arg.strip_prefix(EMBED_ARG)
                .and_then(|rest| rest.strip_prefix('='))
                .map(is_truthy)
        }
    })
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
