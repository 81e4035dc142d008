use std::env;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub submission_delay: Duration,
    pub confirmation_ttl: Duration,
    pub availability_threshold: f64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| {
                    warn!("BIND_ADDR not set, using 0.0.0.0:3000");
                    "0.0.0.0:3000".to_string()
                }),
            submission_delay: Duration::from_millis(
                parse_var("SUBMISSION_DELAY_MS", 1000),
            ),
            confirmation_ttl: Duration::from_millis(
                parse_var("CONFIRMATION_TTL_MS", 3000),
            ),
            availability_threshold: parse_var("SLOT_AVAILABILITY_THRESHOLD", 0.3),
        };

        if !(0.0..=1.0).contains(&config.availability_threshold) {
            warn!(
                "SLOT_AVAILABILITY_THRESHOLD {} outside [0, 1], clamping",
                config.availability_threshold
            );
            return Self {
                availability_threshold: config.availability_threshold.clamp(0.0, 1.0),
                ..config
            };
        }

        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            submission_delay: Duration::from_millis(1000),
            confirmation_ttl: Duration::from_millis(3000),
            availability_threshold: 0.3,
        }
    }
}

fn parse_var<T: std::str::FromStr + std::fmt::Display + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using {}", name, default);
            default
        }
    }
}
