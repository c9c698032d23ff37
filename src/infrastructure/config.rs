use crate::domain::series::DEFAULT_TARGET_POINTS;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastSettings {
    /// Directory holding one `<city>.json` forecast document per city.
    pub fixture_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    #[serde(default = "default_target_points")]
    pub target_points: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            target_points: default_target_points(),
        }
    }
}

fn default_target_points() -> usize {
    DEFAULT_TARGET_POINTS
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
