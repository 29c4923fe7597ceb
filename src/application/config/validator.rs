use crate::application::config::models::Config;
use crate::common::constants::MIN_UNPRIVILEGED_PORT;
use crate::common::error::{ListenerError, Result};

/// Validate configuration for correctness and consistency
pub fn validate_config(config: &Config) -> Result<()> {
    let listener = &config.listener;

    // The redirect URI points at an unprivileged local port
    if listener.port < MIN_UNPRIVILEGED_PORT {
        return Err(ListenerError::ConfigError(format!(
            "Port {} is outside the unprivileged range ({}..=65535)",
            listener.port, MIN_UNPRIVILEGED_PORT
        )));
    }

    if let Some(secs) = listener.accept_timeout_secs {
        if secs == 0 {
            return Err(ListenerError::ConfigError(
                "accept_timeout_secs must be greater than 0 when set".to_string(),
            ));
        }
    }

    Ok(())
}
