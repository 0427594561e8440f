//! Turn a curl command line into a [`RequestModel`].
//!
//! Only the method (`-X`/`--request`), header (`-H`/`--header`) and body
//! (`-d`/`--data`/`--data-binary`) flags are understood. Everything else is
//! skipped without error. Unknown flags do not consume an operand, so the
//! word after one is looked at on its own.

use crate::lexer::{strip_command_name, tokenize, unquote};
use crate::request::RequestModel;

/// Program name stripped from the front of the command line.
pub const SOURCE_COMMAND: &str = "curl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Method,
    Header,
    Data,
}

impl Flag {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "-X" | "--request" => Some(Flag::Method),
            "-H" | "--header" => Some(Flag::Header),
            "-d" | "--data" | "--data-binary" => Some(Flag::Data),
            _ => None,
        }
    }
}

/// Parse a curl command line. Never fails; malformed input yields a
/// best-effort (possibly empty) model.
pub fn parse(command_text: &str) -> RequestModel {
    let args = strip_command_name(command_text, SOURCE_COMMAND);
    let tokens = tokenize(args);
    let mut model = RequestModel::default();

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        if !token.starts_with('-') && !model.has_url() {
            let url = unquote(token);
            if !url.is_empty() {
                model.url = Some(url.to_string());
            }
            continue;
        }

        let Some(flag) = Flag::from_token(token) else {
            tracing::debug!(token = %token, "ignoring unrecognised token");
            continue;
        };
        let Some(operand) = iter.next() else {
            tracing::debug!(flag = %token, "flag without operand, ignored");
            break;
        };

        match flag {
            Flag::Method => model.method = operand.to_uppercase(),
            Flag::Header => {
                if let Some((name, value)) = split_header(unquote(operand)) {
                    model.headers.insert(name, value);
                } else {
                    tracing::debug!(header = %operand, "ignoring header without name or value");
                }
            }
            Flag::Data => model.set_data(unquote(operand)),
        }
    }

    tracing::debug!(
        method = %model.method,
        url = model.url.as_deref().unwrap_or(""),
        headers = model.headers.len(),
        has_data = model.data.is_some(),
        "parsed curl command"
    );
    model
}

/// Split `Name: value` on its first colon.
///
/// Whitespace following every colon is dropped before the value segments are
/// re-joined with `:`, and the joined value is trimmed. The name is kept as
/// written. Returns `None` when either side ends up empty.
fn split_header(header: &str) -> Option<(&str, String)> {
    let mut segments = header.split(':');
    let name = segments.next()?;
    let value = segments
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join(":");
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestData;
    use serde_json::json;

    #[test]
    fn bare_url_defaults_to_get() {
        let model = parse("curl https://example.com");
        assert_eq!(model.method, "GET");
        assert_eq!(model.url.as_deref(), Some("https://example.com"));
        assert!(model.headers.is_empty());
        assert!(model.data.is_none());
    }

    #[test]
    fn method_is_upper_cased() {
        assert_eq!(parse("curl -X post https://a").method, "POST");
        assert_eq!(parse("curl --request put https://a").method, "PUT");
    }

    #[test]
    fn url_is_first_bare_token_anywhere() {
        let model = parse(r#"curl -H "X:y" https://example.com/path"#);
        assert_eq!(model.url.as_deref(), Some("https://example.com/path"));
        assert_eq!(model.headers.get("X"), Some("y"));
    }

    #[test]
    fn later_bare_tokens_do_not_replace_url() {
        let model = parse("curl https://first.example https://second.example");
        assert_eq!(model.url.as_deref(), Some("https://first.example"));
    }

    #[test]
    fn quoted_url_is_unquoted() {
        let model = parse("curl 'https://example.com/?a=1&b=2'");
        assert_eq!(model.url.as_deref(), Some("https://example.com/?a=1&b=2"));
    }

    #[test]
    fn empty_quoted_url_leaves_url_unset() {
        let model = parse("curl '' https://example.com");
        assert_eq!(model.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn header_value_keeps_inner_colons() {
        let model = parse(r#"curl https://a -H "Referer: http://b.example:8080/x""#);
        assert_eq!(
            model.headers.get("Referer"),
            Some("http://b.example:8080/x")
        );
    }

    #[test]
    fn header_drops_whitespace_after_inner_colons() {
        let model = parse(r#"curl https://a -H "X-Time: 12: 30 ""#);
        assert_eq!(model.headers.get("X-Time"), Some("12:30"));
    }

    #[test]
    fn header_without_value_is_ignored() {
        let model = parse(r#"curl https://a -H "X-Empty:" -H "NoColon" -H ": v""#);
        assert!(model.headers.is_empty());
    }

    #[test]
    fn duplicate_headers_overwrite() {
        let model = parse(r#"curl https://a -H "Accept: a" --header 'Accept: b'"#);
        assert_eq!(model.headers.len(), 1);
        assert_eq!(model.headers.get("Accept"), Some("b"));
    }

    #[test]
    fn json_data_promotes_to_post() {
        let model = parse(r#"curl https://a -d '{"a":1}'"#);
        assert_eq!(model.method, "POST");
        assert_eq!(model.headers.get("Content-Type"), Some("application/json"));
        match model.data {
            Some(RequestData::Json { value, .. }) => assert_eq!(value, json!({"a": 1})),
            other => panic!("expected JSON data, got {:?}", other),
        }
    }

    #[test]
    fn plain_data_is_kept_verbatim() {
        let model = parse("curl https://a --data 'plain text'");
        assert_eq!(model.method, "POST");
        assert_eq!(model.data, Some(RequestData::Raw("plain text".to_string())));
        assert!(model.headers.get("Content-Type").is_none());
    }

    #[test]
    fn data_keeps_explicit_method() {
        let model = parse("curl -X PATCH https://a --data-binary 'x=1'");
        assert_eq!(model.method, "PATCH");
    }

    #[test]
    fn json_content_type_overwrites_user_header() {
        let model = parse(r#"curl https://a -H "Content-Type: text/plain" -d '[1]'"#);
        assert_eq!(model.headers.get("Content-Type"), Some("application/json"));
        assert_eq!(model.headers.len(), 1);
    }

    #[test]
    fn trailing_flag_without_operand_is_ignored() {
        let model = parse("curl https://a -X");
        assert_eq!(model.method, "GET");

        let model = parse("curl https://a -d");
        assert_eq!(model.method, "GET");
        assert!(model.data.is_none());

        let model = parse("curl https://a -H");
        assert!(model.headers.is_empty());
    }

    #[test]
    fn unknown_flag_operand_can_become_url() {
        let model = parse("curl -o out.json https://a");
        assert_eq!(model.url.as_deref(), Some("out.json"));
    }

    #[test]
    fn flag_tokens_are_never_urls() {
        let model = parse("curl -v --compressed");
        assert!(model.url.is_none());
    }

    #[test]
    fn missing_command_name_still_parses() {
        let model = parse("-X DELETE https://a");
        assert_eq!(model.method, "DELETE");
        assert_eq!(model.url.as_deref(), Some("https://a"));
    }
}
