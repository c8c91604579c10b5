pub mod name_normalizer;
pub mod operation_normalizer;
pub mod schema_resolver;
pub mod spec_to_ir;
pub mod tag_grouper;

pub use spec_to_ir::transform;
