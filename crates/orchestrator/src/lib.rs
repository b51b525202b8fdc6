pub mod deploy;
pub mod error;
pub mod notify;
pub mod patch;

pub use deploy::{Deployer, UNKNOWN_COMMIT};
pub use error::{OrchestratorError, Result};
pub use notify::{EvaluationNotifier, EvaluationPayload};
pub use patch::{inject_svg_loader, Patcher, SVG_MARKER};
