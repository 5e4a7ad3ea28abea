/// Configuration errors, raised at construction time only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("weight for {modality} must be a non-negative finite number, got {value}")]
    InvalidWeight { modality: String, value: f64 },

    #[error("at least one modality weight must be positive")]
    NoPositiveWeight,

    #[error("invalid thresholds: {reason}")]
    InvalidThresholds { reason: String },

    #[error(
        "window_size must be between 1 and {}, got {window_size}",
        crate::config::defaults::MAX_WINDOW_SIZE
    )]
    InvalidWindow { window_size: usize },

    #[error("{table} entry for '{label}' is out of range: {value}")]
    InvalidLexiconEntry {
        table: String,
        label: String,
        value: f64,
    },

    #[error("crisis phrase list failed to compile: {reason}")]
    InvalidPattern { reason: String },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}
