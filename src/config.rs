//! Engine configuration.

use log::warn;

/// Environment variable overriding the default search depth.
pub const DEPTH_ENV_VAR: &str = "CHESS_RULES_DEPTH";

/// Deepest search accepted from the environment or `setoption`.
pub const MAX_DEPTH: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Depth used by `go` when the command names none.
    pub default_depth: u32,
    pub engine_name: String,
    pub author: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_depth: 3,
            engine_name: format!("chess_rules {}", env!("CARGO_PKG_VERSION")),
            author: "chess_rules developers".to_string(),
        }
    }
}

impl EngineConfig {
    /// Defaults, with `CHESS_RULES_DEPTH` applied when it holds a valid depth.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(DEPTH_ENV_VAR) {
            config.apply_depth(&raw);
        }
        config
    }

    /// Set the default depth from text, keeping the current value when the
    /// text is not a depth in `1..=MAX_DEPTH`.
    pub fn apply_depth(&mut self, raw: &str) -> bool {
        match parse_depth(raw) {
            Some(depth) => {
                self.default_depth = depth;
                true
            }
            None => {
                warn!("ignoring search depth '{raw}', expected 1..={MAX_DEPTH}");
                false
            }
        }
    }
}

/// A search depth in `1..=MAX_DEPTH`, or `None`.
pub(crate) fn parse_depth(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|d| (1..=MAX_DEPTH).contains(d))
}
