use reqgen_core::config::ClientConfig;
use reqgen_core::ir::ApiSpec;
use reqgen_core::{CodeGenerator, GeneratedFile, parse, transform};
use reqgen_js_client::JsClientGenerator;

const SHOP: &str = include_str!("../../reqgen-core/tests/fixtures/shop.json");
const PRECEDENCE: &str = include_str!("../../reqgen-core/tests/fixtures/precedence.json");

fn api(json: &str) -> ApiSpec {
    transform::transform(&parse::from_json(json).unwrap())
}

fn generate(json: &str, config: &ClientConfig) -> Vec<GeneratedFile> {
    JsClientGenerator.generate(&api(json), config).unwrap()
}

fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
    &files
        .iter()
        .find(|f| f.path == path)
        .unwrap_or_else(|| panic!("no file {path}"))
        .content
}

const ORDER_JS: &str = "import request from '@/utils/request'

/**
 * @description Create order
 * @request amount {number}
 * @request currency {string} ISO code
 */
export function postOrders(data) {
  return request({
    url: '/orders',
    method: 'post',
    data,
  })
}

/**
 * @description List orders
 * @param page {integer} page number
 */
export function getOrders(params, data) {
  return request({
    url: '/orders',
    method: 'get',
    params,
    data,
  })
}

/**
 * @description Refund order
 */
export function putOrders(params, data) {
  return request({
    url: '/orders',
    method: 'put',
    params,
    data,
  })
}
";

#[test]
fn generates_one_file_per_matched_tag() {
    let files = generate(SHOP, &ClientConfig::default());
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["order.js", "userManagement.js", "report.js"]);
}

#[test]
fn renders_module_text() {
    let files = generate(SHOP, &ClientConfig::default());
    assert_eq!(file(&files, "order.js"), ORDER_JS);
}

#[test]
fn renders_params_and_request_fields() {
    let files = generate(SHOP, &ClientConfig::default());
    insta::assert_snapshot!(file(&files, "userManagement.js"), @r"
import request from '@/utils/request'

/**
 * @description Create user
 * @request avatar {string}
 * @request name {string} display name
 */
export function postUsers(data) {
  return request({
    url: '/users',
    method: 'post',
    data,
  })
}

/**
 * @description Get user
 * @param id {integer} user id
 */
export function getUsers(params, data) {
  return request({
    url: '/users',
    method: 'get',
    params,
    data,
  })
}

/**
 * @description Delete user
 * @param id {integer}
 */
export function deleteUsers(params, data) {
  return request({
    url: '/users',
    method: 'delete',
    params,
    data,
  })
}
");
}

#[test]
fn generation_is_deterministic() {
    let first = generate(SHOP, &ClientConfig::default());
    let second = generate(SHOP, &ClientConfig::default());
    assert_eq!(first, second);
}

#[test]
fn scenario_user_controller() {
    let doc = r#"{
        "tags": [{"name": "User", "description": "User Controller"}],
        "paths": {"/users/{id}": {"get": {"tags": ["User"]}}}
    }"#;
    let files = generate(doc, &ClientConfig::default());
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "user.js");
    let content = &files[0].content;
    assert!(content.contains("export function getUsers(params, data) {"));
    assert!(content.contains("url: '/users',"));
    assert!(content.contains(" * @description\n"));
}

#[test]
fn scenario_empty_segment() {
    let files = generate(SHOP, &ClientConfig::default());
    let report = file(&files, "report.js");
    assert!(report.contains("export function getAB(params, data) {"));
    assert!(report.contains("url: '/a//b',"));
}

#[test]
fn empty_body_has_no_request_lines() {
    let files = generate(SHOP, &ClientConfig::default());
    let report = file(&files, "report.js");
    assert!(!report.contains("@request"));
}

#[test]
fn precedence_is_visible_in_output() {
    let files = generate(PRECEDENCE, &ClientConfig::default());
    let forms = file(&files, "form.js");
    assert!(forms.contains("@request fromJson {boolean}"));
    assert!(forms.contains("@request fromMultipart {string}"));
    assert!(forms.contains("@request fromUrlencoded {string}"));
    // /all prefers json, so its block has the json field only.
    let all_block = forms
        .split("export function")
        .next()
        .unwrap_or_default()
        .to_string();
    assert!(!all_block.contains("fromUrlencoded"));
}

#[test]
fn empty_modules_are_opt_in() {
    let doc = r#"{
        "tags": [
            {"name": "A", "description": "Alpha Controller"},
            {"name": "B", "description": "Beta Controller"}
        ],
        "paths": {"/a": {"get": {"tags": ["A"]}}}
    }"#;
    let default_files = generate(doc, &ClientConfig::default());
    assert_eq!(default_files.len(), 1);

    let config = ClientConfig {
        emit_empty_modules: true,
        ..ClientConfig::default()
    };
    let files = generate(doc, &config);
    assert_eq!(files.len(), 2);
    assert_eq!(file(&files, "beta.js"), "import request from '@/utils/request'\n");
}

#[test]
fn no_jsdoc_and_custom_import() {
    let doc = r#"{
        "tags": [{"name": "A", "description": "Alpha Controller"}],
        "paths": {"/items": {"post": {"tags": ["A"], "summary": "Add"}}}
    }"#;
    let config = ClientConfig {
        import_line: "import request from '@/lib/http'".to_string(),
        no_jsdoc: true,
        ..ClientConfig::default()
    };
    let files = generate(doc, &config);
    assert_eq!(
        files[0].content,
        "import request from '@/lib/http'

export function postItems(data) {
  return request({
    url: '/items',
    method: 'post',
    data,
  })
}
"
    );
}
