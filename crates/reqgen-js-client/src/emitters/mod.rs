pub mod api_module;

/// File extension of every generated module.
pub const MODULE_EXTENSION: &str = "js";

/// Build the output path for a module stem: `user` → `user.js`.
pub fn module_path(stem: &str) -> String {
    format!("{stem}.{MODULE_EXTENSION}")
}
