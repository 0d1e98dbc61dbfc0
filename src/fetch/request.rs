use std::collections::HashMap;

use reqwest::Url;

use crate::error::AppError;

use super::FetchResult;

/// Origin (`scheme://host[:port]/`) of the page the dashboard is served from. Backend
/// endpoints are resolved against it.
pub fn derive_base_url(page_url: &str) -> FetchResult<Url> {
    let parsed = Url::parse(page_url.trim()).map_err(|err| {
        AppError::config(format!("page URL `{}` is not a URL: {}", page_url, err))
    })?;
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(AppError::config(format!(
            "page URL `{}` has no host to derive a base URL from",
            page_url
        )));
    }

    let mut base = parsed;
    base.set_path("/");
    base.set_query(None);
    base.set_fragment(None);
    Ok(base)
}

/// Resolve an endpoint template such as `/fh/hist/{symbol}` against `base`. Placeholder values
/// are percent-encoded as single path segments.
pub fn endpoint_url(base: &Url, template: &str, symbol: Option<&str>) -> FetchResult<Url> {
    let mut replacements: HashMap<String, String> = HashMap::new();
    if let Some(symbol) = symbol {
        replacements.insert("symbol".to_string(), symbol.to_string());
    }

    let rendered = template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| render_template(segment, &replacements))
        .collect::<FetchResult<Vec<_>>>()?;

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::config(format!("base URL `{}` cannot carry a path", base)))?
        .clear()
        .extend(rendered.iter().map(String::as_str));
    Ok(url)
}

fn render_template(template: &str, replacements: &HashMap<String, String>) -> FetchResult<String> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            let mut key = String::new();
            let mut closed = false;
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == '}' {
                    closed = true;
                    break;
                }
                key.push(next);
            }

            if !closed {
                return Err(AppError::config(format!(
                    "Unterminated placeholder in endpoint template: {{{key}"
                )));
            }

            if key.is_empty() {
                return Err(AppError::config(
                    "Encountered empty placeholder `{}` in endpoint template",
                ));
            }

            let value = replacements.get(&key).ok_or_else(|| {
                AppError::config(format!(
                    "No value provided for placeholder `{}` in endpoint template",
                    key
                ))
            })?;
            result.push_str(value);
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}
