//! Application Configuration

/// Calculations application configuration
#[derive(Debug, Clone)]
pub struct CalculationsConfig {
    /// Offset used when a list request omits `skip`
    pub default_skip: u32,
    /// Page size used when a list request omits `limit`
    pub default_limit: u32,
}

impl Default for CalculationsConfig {
    fn default() -> Self {
        Self {
            default_skip: 0,
            default_limit: 100,
        }
    }
}
