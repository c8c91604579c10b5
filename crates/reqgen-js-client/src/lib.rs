pub mod emitters;
pub mod error;
pub mod generator;

pub use emitters::api_module::ModuleRenderer;
pub use error::GeneratorError;
pub use generator::JsClientGenerator;
