//! Export settings

/// Environment variable overriding the deflate level
pub const COMPRESSION_LEVEL_ENV: &str = "MILESTONES_COMPRESSION_LEVEL";

/// Default deflate level: balance between speed and size
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Settings for writing the workbook package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Deflate level, 0..=9
    pub compression_level: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deflate level (clamped to 9)
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    /// Defaults, overridden by `MILESTONES_COMPRESSION_LEVEL` when it parses
    pub fn from_env() -> Self {
        Self::from_level_var(std::env::var(COMPRESSION_LEVEL_ENV).ok().as_deref())
    }

    fn from_level_var(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|level| Self::default().with_compression_level(level))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(ExportOptions::new().compression_level, 6);
    }

    #[test]
    fn test_level_clamped() {
        let options = ExportOptions::new().with_compression_level(42);
        assert_eq!(options.compression_level, 9);
    }

    #[test]
    fn test_level_var_parsing() {
        assert_eq!(ExportOptions::from_level_var(None).compression_level, 6);
        assert_eq!(ExportOptions::from_level_var(Some(" 2 ")).compression_level, 2);
        assert_eq!(ExportOptions::from_level_var(Some("12")).compression_level, 9);
        assert_eq!(ExportOptions::from_level_var(Some("fast")).compression_level, 6);
        assert_eq!(ExportOptions::from_level_var(Some("-1")).compression_level, 6);
    }

    // The only test that touches the process environment
    #[test]
    fn test_from_env_override() {
        std::env::set_var(COMPRESSION_LEVEL_ENV, "1");
        assert_eq!(ExportOptions::from_env().compression_level, 1);

        std::env::set_var(COMPRESSION_LEVEL_ENV, "not-a-level");
        assert_eq!(ExportOptions::from_env(), ExportOptions::default());

        std::env::remove_var(COMPRESSION_LEVEL_ENV);
        assert_eq!(ExportOptions::from_env(), ExportOptions::default());
    }
}
