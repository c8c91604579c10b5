pub mod diagnostics;
pub mod operations;
pub mod types;

pub use diagnostics::Diagnostic;
pub use operations::*;
pub use types::{ApiInfo, ApiModule, ApiSpec};
