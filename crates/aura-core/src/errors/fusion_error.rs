/// Fusion subsystem errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FusionError {
    /// No modality readings were supplied. The caller should skip the
    /// wellness score for this turn or retry with at least one reading.
    #[error("insufficient signal: fusion requires at least one modality reading")]
    InsufficientSignal,
}
