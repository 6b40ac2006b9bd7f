// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Output configuration derived from the environment.

use super::schema::OutputConfig;

/// Environment variable whose presence means the terminal can show colors.
const TERM_VAR: &str = "TERM";

/// Build the output configuration from the process environment.
pub fn output_config_from_env() -> OutputConfig {
    output_config_from(|key| std::env::var(key).ok())
}

/// Build the output configuration from an arbitrary variable lookup.
pub fn output_config_from<F>(lookup: F) -> OutputConfig
where
    F: Fn(&str) -> Option<String>,
{
    let colors = lookup(TERM_VAR).map(|v| !v.is_empty()).unwrap_or(false);
    tracing::debug!("Color output {}", if colors { "enabled" } else { "disabled" });
    OutputConfig { colors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_enabled_when_term_set() {
        let config = output_config_from(|key| {
            (key == "TERM").then(|| "xterm-256color".to_string())
        });
        assert!(config.colors);
    }

    #[test]
    fn test_colors_disabled_without_term() {
        let config = output_config_from(|_| None);
        assert!(!config.colors);
    }

    #[test]
    fn test_colors_disabled_for_empty_term() {
        let config = output_config_from(|_| Some(String::new()));
        assert!(!config.colors);
    }
}
