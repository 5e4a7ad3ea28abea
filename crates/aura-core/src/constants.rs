/// Aura core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wellness contribution assigned to labels missing from the positivity table.
pub const NEUTRAL_POSITIVITY: f64 = 0.5;

/// Valence assigned to labels missing from the valence table.
pub const NEUTRAL_VALENCE: f64 = 0.0;

/// Conversation messages retained per turn of the context window (user + assistant).
pub const MESSAGES_PER_TURN: usize = 2;

/// Tolerance used when checking that renormalized weights sum to 1.0.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-9;
