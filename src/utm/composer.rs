//! UTM URL 拼接
//!
//! 参数按 source, medium, campaign, content, term 的固定顺序追加到
//! base URL 之后。值使用 `application/x-www-form-urlencoded` 规则编码，
//! 与浏览器 `URLSearchParams` 的输出一致（空格编码为 `+`）。

use url::form_urlencoded;

use super::UtmParams;

/// 拼接最终 URL
///
/// - base URL 为空时返回空串
/// - 空值或纯空白值的参数被跳过，其余值原样编码（不做 trim）
/// - 没有可用参数时原样返回 base URL
/// - base URL 已含 `?` 时用 `&` 连接，否则用 `?`
///
/// base URL 被视为不透明字符串，不做格式校验。
pub fn compose(base_url: &str, params: &UtmParams) -> String {
    if base_url.is_empty() {
        return String::new();
    }

    let query = query_block(params);
    if query.is_empty() {
        return base_url.to_string();
    }

    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base_url, separator, query)
}

/// 仅生成参数块（不含分隔符），没有可用参数时为空串
pub fn query_block(params: &UtmParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (field, value) in params.iter() {
        if value.trim().is_empty() {
            continue;
        }
        serializer.append_pair(&field.query_key(), value);
    }
    serializer.finish()
}
