use log::{debug, warn};

use crate::error::ResolveError;
use crate::ir::*;
use crate::parse::parameter::{Parameter, ParameterOrRef};
use crate::parse::ref_resolve::RefResolver;
use crate::parse::spec::Document;

use super::operation_normalizer::normalize;
use super::schema_resolver::{UNKNOWN_TYPE, resolve_request_fields, type_name};
use super::tag_grouper::{TaggedOperation, group_by_tag};

/// Transform a parsed document into generator-ready modules.
///
/// Never fails: operations without a matching tag are left out and
/// unresolvable schemas degrade to empty field lists. Both are recorded in
/// [`ApiSpec::diagnostics`].
pub fn transform(doc: &Document) -> ApiSpec {
    let resolver = RefResolver::new(doc);

    // Phase 1: Bucket operations by tag
    let grouping = group_by_tag(doc);
    let mut diagnostics = grouping.misses;

    // Phase 2: Normalize and resolve each operation, keeping walk order
    let modules = grouping
        .groups
        .iter()
        .map(|group| ApiModule {
            tag: group.tag.name.clone(),
            description: group.tag.description.clone(),
            operations: group
                .operations
                .iter()
                .map(|op| build_operation(op, &resolver, &mut diagnostics))
                .collect(),
        })
        .collect();

    ApiSpec {
        info: ApiInfo {
            title: doc.info.title.clone(),
            version: doc.info.version.clone(),
        },
        modules,
        diagnostics,
    }
}

fn build_operation(
    op: &TaggedOperation<'_>,
    resolver: &RefResolver<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> ApiOperation {
    let normalized = normalize(op.method, op.path);
    debug!(
        "{} {} -> {} ({})",
        op.method, op.path, normalized.function_name, normalized.cleaned_url
    );

    let mut gap = |error: ResolveError| {
        warn!("{} {}: {error}", op.method, op.path);
        diagnostics.push(Diagnostic::SchemaResolutionGap {
            method: op.method,
            path: op.path.to_string(),
            error,
        });
    };

    let parameters = resolve_parameters(op, resolver, &mut gap);

    let request_fields =
        resolve_request_fields(op.operation.request_body.as_ref(), resolver).unwrap_or_else(
            |error| {
                gap(error);
                FieldMap::new()
            },
        );

    ApiOperation {
        method: op.method,
        raw_url: op.path.to_string(),
        cleaned_url: normalized.cleaned_url,
        function_name: normalized.function_name,
        summary: op.operation.summary.clone().unwrap_or_default(),
        parameters,
        request_fields,
    }
}

/// Path-level parameters first, then the operation's own; an operation
/// parameter replaces a path-level one with the same name and location.
fn resolve_parameters<'a>(
    op: &TaggedOperation<'a>,
    resolver: &RefResolver<'a>,
    gap: &mut impl FnMut(ResolveError),
) -> Vec<ApiParameter> {
    let mut resolve_all = |params: &'a [ParameterOrRef]| {
        params
            .iter()
            .filter_map(|p| resolver.parameter(p).map_err(&mut *gap).ok())
            .collect::<Vec<&'a Parameter>>()
    };

    let path_level = resolve_all(&op.path_item.parameters);
    let own = resolve_all(&op.operation.parameters);

    path_level
        .into_iter()
        .filter(|p| {
            !own
                .iter()
                .any(|o| o.name == p.name && o.location == p.location)
        })
        .chain(own.iter().copied())
        .map(|p| ApiParameter {
            name: p.name.clone(),
            type_name: p
                .schema
                .as_ref()
                .map(type_name)
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            description: p.description.clone().unwrap_or_default(),
        })
        .collect()
}
