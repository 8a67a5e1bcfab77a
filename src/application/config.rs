use std::path::PathBuf;

/// Runtime configuration assembled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging (`-v` count)
    pub verbose: u8,
    /// File that receives log output while the terminal UI is running
    pub log_file: Option<PathBuf>,
    /// Whether mouse clicks on the keypad are captured
    pub mouse: bool,
    /// Replay JSON actions from stdin instead of starting the UI
    pub batch: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            log_file: None,
            mouse: true,
            batch: false,
        }
    }
}

impl AppConfig {
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    pub fn with_batch(mut self, enabled: bool) -> Self {
        self.batch = enabled;
        self
    }

    /// Default tracing filter for the configured verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.verbose, 0);
        assert!(config.log_file.is_none());
        assert!(config.mouse);
        assert!(!config.batch);
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_builder_and_levels() {
        let config = AppConfig { verbose: 2, ..AppConfig::default() }
            .with_log_file(Some(PathBuf::from("tcalc.log")))
            .with_mouse(false)
            .with_batch(true);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("tcalc.log")));
        assert!(!config.mouse);
        assert!(config.batch);
        assert_eq!(AppConfig { verbose: 7, ..config }.log_level(), "trace");
    }
}
