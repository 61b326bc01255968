//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer as _, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::logging::{LogFormat, LoggingConfig};

use super::ObservabilityError;

pub(super) fn init_subscriber(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let fmt_layer = match config.log_format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Connection-level chatter from the HTTP server and the database driver stays at `warn`.
fn default_directives(log_level: &str) -> String {
    format!("{log_level},hyper=warn,sqlx=warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_quiet_noisy_crates() {
        assert_eq!(default_directives("debug"), "debug,hyper=warn,sqlx=warn");
    }

    #[test]
    fn default_directives_parse() {
        let parsed = default_directives("info").parse::<EnvFilter>();

        assert!(parsed.is_ok(), "expected valid filter directives");
    }
}
