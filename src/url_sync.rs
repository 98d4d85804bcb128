//! URL Sync
//!
//! Keeps the `names` query parameter in step with the entry list so the
//! page URL reproduces the current list.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside one name
const NAME_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Names carried by `param` in a query string (with or without the leading `?`).
///
/// `None` when the parameter is missing; blank names are dropped.
pub fn parse_names(search: &str, param: &str) -> Option<Vec<String>> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let value = query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == param)
        .map(|(_, value)| value)?;

    Some(
        value
            .split(',')
            .map(|name| decode_component(name).trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
    )
}

/// Encode names as a comma-separated parameter value
pub fn encode_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| utf8_percent_encode(name.as_ref(), NAME_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Rebuild `search` with `param` set to `names`, keeping every other pair.
///
/// An empty name list removes the parameter. The result is either empty
/// or starts with `?`.
pub fn with_names<S: AsRef<str>>(search: &str, param: &str, names: &[S]) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            decode_component(key) != param
        })
        .map(str::to_string)
        .collect();

    if !names.is_empty() {
        pairs.push(format!("{}={}", param, encode_names(names)));
    }

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Names from the current page URL
pub fn read_location_names(param: &str) -> Option<Vec<String>> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_names(&search, param)
}

/// Rewrite the page URL to carry `names`, without adding a history entry
pub fn replace_location_names<S: AsRef<str>>(param: &str, names: &[S]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let (Ok(path), Ok(search), Ok(hash)) =
        (location.pathname(), location.search(), location.hash())
    else {
        return;
    };

    let next_search = with_names(&search, param, names);
    if next_search == search {
        return;
    }
    let url = format!("{}{}{}", path, next_search, hash);
    match window.history() {
        Ok(history) => {
            let replaced =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
            if let Err(err) = replaced {
                log::warn!("[URL] replaceState failed: {:?}", err);
            }
        }
        Err(err) => log::warn!("[URL] history unavailable: {:?}", err),
    }
}
