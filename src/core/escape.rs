//! 字段值 HTML 转义

use serde_json::Value;

/// 转义 HTML 特殊字符
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 将标量值转为转义后的字符串值
///
/// 数字和布尔值先按字符串输出（true 为 "1"，false 为空串），
/// 对象和数组不是标量，原样返回
pub fn escape_scalar(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(escape_html(s)),
        Value::Number(n) => Value::String(n.to_string()),
        Value::Bool(true) => Value::String("1".to_string()),
        Value::Bool(false) => Value::String(String::new()),
        other => other.clone(),
    }
}
