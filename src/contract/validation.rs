//! Validation Utilities
//!
//! 输入校验的纯函数，失败时返回 [`AppError`] 而不是 panic

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use super::types::{codes, AppError};

/// 前端 (ECMAScript) 的空白字符集：WhiteSpace + LineTerminator
///
/// 与 Rust 的 `char::is_whitespace` 不同：包含 U+FEFF，不包含 U+0085
const JS_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// 宽松的邮箱格式，不遵循 RFC 5322
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "^[^{ws}@]+@[^{ws}@]+\\.[^{ws}@]+$",
        ws = JS_WHITESPACE
    );
    Regex::new(&pattern).expect("valid regex")
});

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_js(input: &str) -> &str {
    input.trim_matches(is_js_whitespace)
}

/// 判断是否为邮箱格式
///
/// ```
/// assert!(quickstack::contract::is_valid_email("a@b.co"));
/// assert!(!quickstack::contract::is_valid_email("a b@c.d"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 检查必填字段
///
/// 字段缺失、为 null、或为去空白后为空的字符串，均视为缺失。
/// 一次性报告全部缺失字段，顺序与 `required_fields` 一致。
pub fn validate_required(
    record: &Map<String, Value>,
    required_fields: &[&str],
) -> Result<(), AppError> {
    let missing: Vec<&str> = required_fields
        .iter()
        .copied()
        .filter(|field| is_missing(record.get(*field)))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(AppError::new(
        codes::VALIDATION_ERROR,
        format!("Missing required fields: {}", missing.join(", ")),
    )
    .with_details(json!({ "missingFields": missing })))
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => trim_js(s).is_empty(),
        Some(_) => false,
    }
}

/// 去掉首尾空白后移除所有 `<` 和 `>`
pub fn sanitize_string(input: &str) -> String {
    trim_js(input).replace(['<', '>'], "")
}
