use fruitcast_media::SourceProvider;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub bind_address: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_rate: u32,
    pub jpeg_quality: u8,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        // Load from environment variables with sensible defaults
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Config {
            bind_address,
            frame_width: env_u32("FRAME_WIDTH", 640),
            frame_height: env_u32("FRAME_HEIGHT", 480),
            frame_rate: env_u32("FRAME_RATE", 30),
            jpeg_quality: env_u32("JPEG_QUALITY", 80).min(100) as u8,
        })
    }

    /// Pacing interval for one frame at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{} is not a number, using default {}", key, default);
            default
        }),
        Err(_) => default,
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn SourceProvider>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn SourceProvider>) -> Self {
        Self { config, provider }
    }
}
