// Single source of truth for all default values.

// --- Fusion ---
pub const DEFAULT_TEXT_WEIGHT: f64 = 0.3;
pub const DEFAULT_VOICE_WEIGHT: f64 = 0.3;
pub const DEFAULT_FACE_WEIGHT: f64 = 0.4;
pub const DEFAULT_HIGH_RISK_MAX: f64 = 0.3; // score <= this => high risk
pub const DEFAULT_MEDIUM_RISK_MAX: f64 = 0.6; // score <= this => medium risk

// --- Discrepancy ---
pub const DEFAULT_FLAG_DISTANCE: f64 = 0.5;
pub const DEFAULT_HIGH_DISTANCE: f64 = 1.0;

// --- Session ---
pub const DEFAULT_WINDOW_SIZE: usize = 10; // turns, i.e. 20 messages retained
pub const MAX_WINDOW_SIZE: usize = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

// --- Lexicon ---
/// Emotion label → wellness positivity in [0, 1]. Used by text and face.
pub const DEFAULT_POSITIVITY: &[(&str, f64)] = &[
    ("joy", 1.0),
    ("happy", 1.0),
    ("surprise", 0.7),
    ("neutral", 0.5),
    ("sadness", 0.3),
    ("sad", 0.3),
    ("fear", 0.2),
    ("anger", 0.1),
    ("angry", 0.1),
    ("disgust", 0.1),
];

/// Emotion label → valence in [-1, 1]. Used for pairwise discrepancy distance.
pub const DEFAULT_VALENCE: &[(&str, f64)] = &[
    ("joy", 1.0),
    ("happy", 1.0),
    ("surprise", 0.6),
    ("neutral", 0.0),
    ("sadness", -0.7),
    ("sad", -0.7),
    ("fear", -0.8),
    ("anger", -0.9),
    ("angry", -0.9),
    ("disgust", -0.6),
];
