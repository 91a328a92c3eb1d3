use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `AUDIENCE_LENS__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Tunables for snapshot assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Country rows kept after ranking by differential.
    #[serde(default = "default_top_countries")]
    pub top_countries: usize,
    /// Cap on the aggregated unique-interest list.
    #[serde(default = "default_interest_limit")]
    pub interest_limit: usize,
    /// Overperforming countries whose localization approach is surfaced.
    #[serde(default = "default_localization_highlights")]
    pub localization_highlights: usize,
    /// Slices in the audience-distribution pie.
    #[serde(default = "default_distribution_slices")]
    pub distribution_slices: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

// Default functions
fn default_top_countries() -> usize {
    7
}
fn default_interest_limit() -> usize {
    12
}
fn default_localization_highlights() -> usize {
    3
}
fn default_distribution_slices() -> usize {
    5
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_countries: default_top_countries(),
            interest_limit: default_interest_limit(),
            localization_highlights: default_localization_highlights(),
            distribution_slices: default_distribution_slices(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("AUDIENCE_LENS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
