use crate::cap::MaxLines;
use crate::input::InputSource;
use crate::progress::DEFAULT_PROGRESS_INTERVAL;
use derive_builder::Builder;
use std::time::Duration;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub input: InputSource,
    /// Collect first-seen samples and report the full distribution.
    #[builder(default)]
    pub distribution: bool,
    #[builder(default)]
    pub max_lines: MaxLines,
    #[builder(default)]
    pub progress: bool,
    #[builder(default = "DEFAULT_PROGRESS_INTERVAL")]
    pub progress_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            distribution: false,
            max_lines: MaxLines::unlimited(),
            progress: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}
