pub mod crisis_screen;
pub mod response_generator;

pub use crisis_screen::ICrisisScreen;
pub use response_generator::{IResponseGenerator, ResponseRequest, RiskSignal};
