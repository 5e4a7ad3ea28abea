pub mod config_error;
pub mod fusion_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use fusion_error::FusionError;
pub use session_error::SessionError;

/// Root error type for the Aura core.
#[derive(Debug, thiserror::Error)]
pub enum AuraError {
    #[error("fusion error: {0}")]
    FusionError(#[from] FusionError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("session error: {0}")]
    SessionError(#[from] SessionError),

    #[error("response generator failed: {reason}")]
    Generator { reason: String },
}

pub type AuraResult<T> = Result<T, AuraError>;
