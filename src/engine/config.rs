use std::time::Duration;

/// Public lyric endpoint the game ships against.
pub const DEFAULT_API_URL: &str = "https://taylorswiftapi.onrender.com/get";

/// Tunables for the round controller. Production uses the defaults; tests
/// shrink the delays so timer behavior can be observed quickly.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub api_url: String,
    /// How long the win celebration stays before auto-advancing.
    pub celebration_delay: Duration,
    /// How long a loss taunt stays on screen.
    pub feedback_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            celebration_delay: Duration::from_secs(3),
            feedback_delay: Duration::from_secs(2),
        }
    }
}
