//! Request model shared by the parser and the renderer.
//!
//! A [`RequestModel`] is built fresh for every conversion, filled in a single
//! left-to-right pass over the curl tokens and then handed to the renderer.

use serde_json::Value;

/// Method used when the command line does not name one.
pub const DEFAULT_METHOD: &str = "GET";

/// Method a body-carrying request is promoted to when it would otherwise be a GET.
pub const BODY_METHOD: &str = "POST";

/// Header added whenever the request body parses as JSON.
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Ordered header list. Re-inserting a name overwrites the value but keeps
/// the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    entries: Vec<(String, String)>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a header. Names are matched exactly (case-sensitive).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Request body as given to `-d` / `--data` / `--data-binary`.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestData {
    /// Body parsed as JSON. `raw` is the unquoted text it was parsed from.
    Json { value: Value, raw: String },
    /// Body that is not valid JSON, kept verbatim.
    Raw(String),
}

impl RequestData {
    /// Classify a body: JSON when it parses, raw text otherwise.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => RequestData::Json {
                value,
                raw: text.to_string(),
            },
            Err(_) => RequestData::Raw(text.to_string()),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, RequestData::Json { .. })
    }

    /// The text the body was given as on the command line.
    pub fn raw_text(&self) -> &str {
        match self {
            RequestData::Json { raw, .. } => raw,
            RequestData::Raw(raw) => raw,
        }
    }
}

/// Structured form of one HTTP request as described by a curl command.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestModel {
    /// Always upper-case.
    pub method: String,
    /// First bare (non-flag) token; `None` until one is seen.
    pub url: Option<String>,
    pub headers: HeaderList,
    pub data: Option<RequestData>,
}

impl Default for RequestModel {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
            url: None,
            headers: HeaderList::new(),
            data: None,
        }
    }
}

impl RequestModel {
    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Store a request body, promoting GET to POST and tagging JSON bodies
    /// with `Content-Type: application/json`.
    pub fn set_data(&mut self, text: &str) {
        if self.method == DEFAULT_METHOD {
            self.method = BODY_METHOD.to_string();
        }
        let data = RequestData::from_text(text);
        if data.is_json() {
            self.headers.insert(CONTENT_TYPE, JSON_MEDIA_TYPE);
        }
        self.data = Some(data);
    }
}
