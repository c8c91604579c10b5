use minijinja::{AutoEscape, Environment, context};
use reqgen_core::ir::ApiOperation;
use reqgen_core::parse::operation::HttpMethod;
use serde::Serialize;

use crate::error::GeneratorError;

const TEMPLATE_NAME: &str = "api_module.js.j2";

/// Escape `*/` sequences that would prematurely close JSDoc comment blocks,
/// and fold line breaks so each entry stays on one comment line.
fn escape_jsdoc(value: String) -> String {
    value
        .replace("*/", "*\\/")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// ` text` for a non-empty description, nothing otherwise.
fn doc_suffix(value: String) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!(" {}", escape_jsdoc(value))
    }
}

fn braced(value: String) -> String {
    format!("{{{value}}}")
}

/// Renders one request module per tag. The template is compiled once and
/// reused for every module.
#[derive(Debug)]
pub struct ModuleRenderer {
    env: Environment<'static>,
}

#[derive(Debug, Serialize)]
struct OperationContext<'a> {
    function_name: &'a str,
    url: &'a str,
    method: &'a str,
    /// `post` calls take only `data`; every other method takes `params, data`.
    body_only: bool,
    summary: &'a str,
    params: Vec<DocEntry<'a>>,
    request_fields: Vec<DocEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct DocEntry<'a> {
    name: &'a str,
    type_name: &'a str,
    description: &'a str,
}

impl ModuleRenderer {
    pub fn new() -> Result<Self, GeneratorError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("doc_suffix", doc_suffix);
        env.add_filter("braced", braced);
        env.add_template(
            TEMPLATE_NAME,
            include_str!("../../templates/api_module.js.j2"),
        )?;
        Ok(Self { env })
    }

    /// Render the text of one module: the import line, then one documented
    /// function per operation in the order given.
    pub fn render(
        &self,
        import_line: &str,
        operations: &[ApiOperation],
        no_jsdoc: bool,
    ) -> Result<String, GeneratorError> {
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        let operations: Vec<OperationContext<'_>> =
            operations.iter().map(build_operation_context).collect();

        let rendered = tmpl.render(context! {
            import_line => import_line,
            operations => operations,
            no_jsdoc => no_jsdoc,
        })?;
        Ok(rendered)
    }
}

fn build_operation_context(op: &ApiOperation) -> OperationContext<'_> {
    let params = op
        .parameters
        .iter()
        .map(|p| DocEntry {
            name: &p.name,
            type_name: &p.type_name,
            description: &p.description,
        })
        .collect();

    // Request fields are listed alphabetically.
    let mut request_fields: Vec<DocEntry<'_>> = op
        .request_fields
        .iter()
        .map(|(name, field)| DocEntry {
            name,
            type_name: &field.type_name,
            description: &field.description,
        })
        .collect();
    request_fields.sort_by(|a, b| a.name.cmp(b.name));

    OperationContext {
        function_name: &op.function_name,
        url: &op.cleaned_url,
        method: op.method.as_str(),
        body_only: op.method == HttpMethod::Post,
        summary: &op.summary,
        params,
        request_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_jsdoc() {
        assert_eq!(escape_jsdoc("a */ b".to_string()), "a *\\/ b");
        assert_eq!(escape_jsdoc("line\r\nnext\nlast".to_string()), "line next last");
    }

    #[test]
    fn test_doc_suffix() {
        assert_eq!(doc_suffix(String::new()), "");
        assert_eq!(doc_suffix("user id".to_string()), " user id");
    }

    #[test]
    fn test_braced() {
        assert_eq!(braced("number".to_string()), "{number}");
    }

    #[test]
    fn test_empty_module_is_just_the_import() {
        let renderer = ModuleRenderer::new().unwrap();
        let out = renderer
            .render("import request from '@/utils/request'", &[], false)
            .unwrap();
        assert_eq!(out, "import request from '@/utils/request'\n");
    }
}
