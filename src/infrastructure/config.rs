use crate::application::canvas::Stroke;
use crate::application::figure_painter::{FigurePainter, FigureStyle};
use crate::domain::figure::Figure;
use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;

const CONFIG_FILE: &str = "config/sensor_figure";
const ENV_PREFIX: &str = "SENSOR_FIGURE";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub figure: FigureSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// Resolve `host` (IP literal or hostname) to the first matching address
    pub async fn addr(&self) -> anyhow::Result<SocketAddr> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("failed to resolve server host {:?}", self.host))?
            .next()
            .with_context(|| format!("server host {:?} resolved to no address", self.host))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FigureSettings {
    pub width: f64,
    pub height: f64,
    pub marker_radius: f64,
    pub head_radius: f64,
    pub line_width: f64,
    pub line_color: String,
    pub background: String,
}

impl FigureSettings {
    pub fn painter(&self) -> FigurePainter {
        FigurePainter::new(
            Figure::new(self.width, self.height),
            FigureStyle {
                line: Stroke::new(self.line_color.clone(), self.line_width),
                marker_radius: self.marker_radius,
                head_radius: self.head_radius,
            },
        )
    }
}

/// Defaults, then `config/sensor_figure.*` if present, then `SENSOR_FIGURE__*` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_with(
        config::File::with_name(CONFIG_FILE).required(false),
        environment(),
    )
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with<S>(file: S, env: config::Environment) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("figure.width", 400.0)?
        .set_default("figure.height", 400.0)?
        .set_default("figure.marker_radius", 8.0)?
        .set_default("figure.head_radius", 20.0)?
        .set_default("figure.line_width", 3.0)?
        .set_default("figure.line_color", "black")?
        .set_default("figure.background", "white")?
        .add_source(file)
        .add_source(env)
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.figure.validate()?;

    Ok(app_config)
}

impl FigureSettings {
    /// Every dimension must be a finite, positive number
    fn validate(&self) -> anyhow::Result<()> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("marker_radius", self.marker_radius),
            ("head_radius", self.head_radius),
            ("line_width", self.line_width),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("figure.{} must be a finite positive number, got {}", name, value);
            }
        }
        Ok(())
    }
}
