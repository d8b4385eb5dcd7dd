//! Mod activation
//!
//! The host runs mods in two phases: before its database is loaded the
//! configuration is read and the colour-conversion capability settled, and
//! once the database exists the item table is adjusted. [`Activation`] holds
//! what the first phase decided so the second can run against it.

use crate::adjust::{adjust_ammunition, AdjustResult, LOG_PREFIX};
use crate::config::{ConfigError, Configuration};
use crate::items::ItemTable;
use crate::logger::{HostLogger, LogColour};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    config: Configuration,
    can_interpolate: bool,
}

impl Activation {
    /// Settle configuration and capability, or `None` when the mod should not run
    ///
    /// `converter_installed` is only called when the configuration asks for
    /// the colour converter.
    pub fn prepare<F>(
        loaded: Result<Configuration, ConfigError>,
        converter_installed: F,
        logger: &dyn HostLogger,
    ) -> Option<Self>
    where
        F: FnOnce() -> bool,
    {
        let config = match loaded {
            Ok(config) => config,
            Err(e) => {
                logger.log(&format!("{}: {}", LOG_PREFIX, e), LogColour::Red);
                return None;
            }
        };

        if !config.general.enabled {
            logger.log(
                &format!("{} is disabled in the config file.", LOG_PREFIX),
                LogColour::Red,
            );
            return None;
        }

        let can_interpolate = if config.general.use_color_converter {
            let installed = converter_installed();
            if installed {
                logger.log(
                    &format!(
                        "{}: Color Converter mod installed. Hex colour values are enabled.",
                        LOG_PREFIX
                    ),
                    LogColour::Cyan,
                );
            } else {
                logger.log(
                    &format!(
                        "{}: Color Converter mod not found. Only vanilla colours are enabled.",
                        LOG_PREFIX
                    ),
                    LogColour::Yellow,
                );
            }
            installed
        } else {
            logger.log(
                &format!(
                    "{}: Color Converter compatibility has been manually disabled in the configuration file.",
                    LOG_PREFIX
                ),
                LogColour::Yellow,
            );
            false
        };

        Some(Self {
            config,
            can_interpolate,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn can_interpolate(&self) -> bool {
        self.can_interpolate
    }

    /// Run the adjustment pass over the host's item table
    pub fn apply(&self, items: &mut ItemTable, logger: &dyn HostLogger) -> AdjustResult {
        adjust_ammunition(items, &self.config, self.can_interpolate, logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validate;
    use crate::logger::MemoryLogger;
    use serde_json::json;
    use std::cell::Cell;

    fn range_config(enabled: bool, use_color_converter: bool) -> Configuration {
        validate(&json!({
            "general": {
                "enabled": enabled,
                "debug": false,
                "useColorConverter": use_color_converter
            },
            "penetration": [
                { "range": { "min": 0, "max": 100 }, "colour": { "high": "red", "low": "#ffffff" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_config_error_is_logged_once() {
        let logger = MemoryLogger::new();
        let activation = Activation::prepare(Err(ConfigError::NotAnObject), || true, &logger);

        assert!(activation.is_none());
        assert_eq!(
            logger.entries(),
            vec![(
                "EasyAmmo: Configuration is not an object.".to_string(),
                LogColour::Red
            )]
        );
    }

    #[test]
    fn test_disabled_mod_does_not_activate() {
        let logger = MemoryLogger::new();
        let probed = Cell::new(false);
        let activation = Activation::prepare(
            Ok(range_config(false, true)),
            || {
                probed.set(true);
                true
            },
            &logger,
        );

        assert!(activation.is_none());
        assert!(!probed.get());
        assert_eq!(
            logger.messages(LogColour::Red),
            vec!["EasyAmmo is disabled in the config file."]
        );
    }

    #[test]
    fn test_converter_installed_enables_interpolation() {
        let logger = MemoryLogger::new();
        let activation = Activation::prepare(Ok(range_config(true, true)), || true, &logger).unwrap();

        assert!(activation.can_interpolate());
        assert_eq!(logger.messages(LogColour::Cyan).len(), 1);
    }

    #[test]
    fn test_converter_missing_falls_back_to_vanilla() {
        let logger = MemoryLogger::new();
        let activation = Activation::prepare(Ok(range_config(true, true)), || false, &logger).unwrap();

        assert!(!activation.can_interpolate());
        assert!(logger.messages(LogColour::Yellow)[0].contains("not found"));
    }

    #[test]
    fn test_converter_disabled_skips_detection() {
        let logger = MemoryLogger::new();
        let probed = Cell::new(false);
        let activation = Activation::prepare(
            Ok(range_config(true, false)),
            || {
                probed.set(true);
                true
            },
            &logger,
        )
        .unwrap();

        assert!(!activation.can_interpolate());
        assert!(!probed.get());
        assert!(logger.messages(LogColour::Yellow)[0].contains("manually disabled"));
    }
}
