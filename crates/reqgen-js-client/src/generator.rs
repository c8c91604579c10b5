use std::collections::HashSet;

use log::{debug, warn};
use reqgen_core::config::ClientConfig;
use reqgen_core::ir::ApiSpec;
use reqgen_core::transform::name_normalizer::module_file_stem;
use reqgen_core::{CodeGenerator, GeneratedFile};

use crate::emitters::api_module::ModuleRenderer;
use crate::emitters::module_path;
use crate::error::GeneratorError;

/// Generates one JavaScript request module per tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClientGenerator;

impl CodeGenerator for JsClientGenerator {
    type Config = ClientConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        api: &ApiSpec,
        config: &ClientConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let renderer = ModuleRenderer::new()?;
        let mut seen_paths = HashSet::new();
        let mut files = Vec::new();

        for module in &api.modules {
            if module.operations.is_empty() && !config.emit_empty_modules {
                debug!("tag '{}' has no operations, skipping", module.tag);
                continue;
            }

            let Some(stem) = module_file_stem(&module.tag, module.description.as_deref()) else {
                warn!(
                    "tag '{}' yields no usable file name, skipping {} operations",
                    module.tag,
                    module.operations.len()
                );
                continue;
            };

            let path = module_path(&stem);
            if !seen_paths.insert(path.clone()) {
                warn!("tag '{}' also maps to {path}; the later module wins", module.tag);
            }

            let content = renderer.render(&config.import_line, &module.operations, config.no_jsdoc)?;
            files.push(GeneratedFile { path, content });
        }

        Ok(files)
    }
}
