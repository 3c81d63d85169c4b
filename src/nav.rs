//! Codec for the query-string navigation channel.
//!
//! The session does not own the navigation channel; it parses the two
//! parameters it reacts to (`folder`, `snippet`) out of whatever the shell
//! carries and renders outgoing requests back into the same shape.

/// Navigation parameters carried by the external channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavParams {
    /// Folder path, or `None` when no folder is selected.
    pub folder: Option<String>,
    /// Open-snippet id, or `None` when no document is open.
    pub snippet: Option<String>,
}

/// Parse navigation parameters from a query string.
///
/// Accepts an optional leading `?`, ignores unknown keys, and treats empty
/// values as absent. `+` and `%XX` escapes are decoded.
///
/// # Returns
/// The parsed [`NavParams`]; unparseable pairs are skipped.
pub fn parse_query(query: &str) -> NavParams {
    let mut params = NavParams::default();
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        let value = percent_decode(raw);
        if value.is_empty() {
            continue;
        }
        match key {
            "folder" => params.folder = Some(value),
            "snippet" => params.snippet = Some(value),
            _ => {}
        }
    }
    params
}

/// Render navigation parameters as a query string (no leading `?`).
///
/// # Returns
/// `folder=...&snippet=...` with absent parameters omitted.
pub fn encode_query(params: &NavParams) -> String {
    let mut out = String::new();
    if let Some(folder) = &params.folder {
        out.push_str("folder=");
        out.push_str(&percent_encode(folder));
    }
    if let Some(snippet) = &params.snippet {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str("snippet=");
        out.push_str(&percent_encode(snippet));
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", byte));
        }
    }
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'+' => {
                out.push(b' ');
                idx += 1;
            }
            b'%' if idx + 2 < bytes.len() => {
                match (hex_value(bytes[idx + 1]), hex_value(bytes[idx + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        idx += 3;
                    }
                    _ => {
                        out.push(b'%');
                        idx += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                idx += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
