// SPDX-License-Identifier: Apache-2.0

use freedom_atlas_core::{ENV_LOG_JSON, ENV_LOG_LEVEL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug)]
pub(crate) struct LogFlags {
    pub quiet: bool,
    pub verbose: u8,
}

impl LogFlags {
    pub(crate) fn level(self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn env_bool(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Installs the global subscriber once. Output goes to stderr so stdout only
/// ever carries command payloads.
pub(crate) fn init_logging(flags: LogFlags) {
    let filter = std::env::var(ENV_LOG_LEVEL)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(flags.level()));

    let result = if env_bool(ENV_LOG_JSON) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::LogFlags;

    #[test]
    fn verbosity_maps_to_levels() {
        let level = |quiet, verbose| LogFlags { quiet, verbose }.level();
        assert_eq!(level(false, 0), "warn");
        assert_eq!(level(false, 1), "info");
        assert_eq!(level(false, 2), "debug");
        assert_eq!(level(false, 7), "trace");
        assert_eq!(level(true, 3), "error");
    }
}
