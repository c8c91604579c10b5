mod fetch;

use std::path::Path;

use anyhow::{Context, Result};

use reqgen_core::config::{self, CONFIG_FILE_NAME, ReqgenConfig};
use reqgen_core::ir::{ApiSpec, Diagnostic};
use reqgen_core::sink::{DirectorySink, persist_all};
use reqgen_core::{CodeGenerator, parse, transform};
use reqgen_js_client::JsClientGenerator;

fn main() -> Result<()> {
    env_logger::init();

    let cfg = try_load_config()?.unwrap_or_default();
    cmd_generate(&cfg)
}

fn try_load_config() -> Result<Option<ReqgenConfig>> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    config::load_config(config_path).map_err(|e| anyhow::anyhow!(e))
}

fn cmd_generate(cfg: &ReqgenConfig) -> Result<()> {
    eprintln!("Generating {} → {}", cfg.input, cfg.output);

    let text = fetch::fetch_document(&cfg.input)
        .with_context(|| format!("failed to fetch {}", cfg.input))?;
    let doc = parse::from_json(&text)
        .with_context(|| format!("failed to parse document from {}", cfg.input))?;
    let api = transform::transform(&doc);

    let files = JsClientGenerator
        .generate(&api, &cfg.client)
        .context("failed to render modules")?;

    let mut sink = DirectorySink::new(&cfg.output);
    persist_all(&mut sink, &files)
        .with_context(|| format!("failed to write modules to {}", cfg.output))?;
    for file in &files {
        eprintln!("  wrote {}", sink.base().join(&file.path).display());
    }

    report(&api, files.len());
    Ok(())
}

fn report(api: &ApiSpec, file_count: usize) {
    for diagnostic in &api.diagnostics {
        match diagnostic {
            Diagnostic::TagMatchMiss { .. } => eprintln!("  skipped: {diagnostic}"),
            Diagnostic::SchemaResolutionGap { .. } => eprintln!("  degraded: {diagnostic}"),
        }
    }
    eprintln!("{}", summary_line(api, file_count));
}

/// Skipped operations are missing from the output; degraded ones were
/// generated with some parameters or fields left out.
fn summary_line(api: &ApiSpec, file_count: usize) -> String {
    let skipped = api
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::TagMatchMiss { .. }))
        .count();
    format!(
        "Done. {} operation(s) in {} file(s), {} skipped, {} degraded.",
        api.operation_count(),
        file_count,
        skipped,
        api.diagnostics.len() - skipped
    )
}

#[cfg(test)]
mod tests {
    use reqgen_core::error::ResolveError;
    use reqgen_core::ir::{ApiInfo, ApiModule, ApiOperation, FieldMap};
    use reqgen_core::parse::operation::HttpMethod;

    use super::*;

    fn operation(path: &str) -> ApiOperation {
        ApiOperation {
            method: HttpMethod::Put,
            raw_url: path.to_string(),
            cleaned_url: path.to_string(),
            function_name: "putOrders".to_string(),
            summary: String::new(),
            parameters: Vec::new(),
            request_fields: FieldMap::new(),
        }
    }

    #[test]
    fn test_summary_counts_gaps_as_degraded() {
        let api = ApiSpec {
            info: ApiInfo {
                title: "Shop".to_string(),
                version: "1".to_string(),
            },
            modules: vec![ApiModule {
                tag: "order".to_string(),
                description: Some("Order Controller".to_string()),
                operations: vec![operation("/orders")],
            }],
            diagnostics: vec![
                Diagnostic::TagMatchMiss {
                    method: HttpMethod::Get,
                    path: "/internal/health".to_string(),
                    tag: Some("actuator".to_string()),
                },
                Diagnostic::SchemaResolutionGap {
                    method: HttpMethod::Put,
                    path: "/orders".to_string(),
                    error: ResolveError::RefTargetNotFound(
                        "#/components/schemas/RefundRequest".to_string(),
                    ),
                },
            ],
        };
        assert_eq!(
            summary_line(&api, 1),
            "Done. 1 operation(s) in 1 file(s), 1 skipped, 1 degraded."
        );
    }
}
