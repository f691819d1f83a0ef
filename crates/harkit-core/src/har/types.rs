use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// HAR format version written by [`Har::new`]
pub const HAR_VERSION: &str = "1.2";

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Top-level HAR object
///
/// The `log` key is always written, even for an empty log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Har {
    pub log: Log,
}

impl Har {
    /// Create an empty HAR 1.2 document produced by `creator`
    pub fn new(creator: Creator) -> Self {
        Self {
            log: Log {
                version: HAR_VERSION.to_string(),
                creator,
                ..Default::default()
            },
        }
    }
}

/// Main HAR log object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub version: String,
    pub creator: Creator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<Creator>,
    #[serde(default)]
    pub pages: Vec<Page>,
    pub entries: Vec<Entry>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Log {
    /// Find the page with the given id
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Entries attributed to the page with the given id, in log order
    pub fn entries_for_page<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| !entry.page_ref.is_empty() && entry.page_ref == id)
    }
}

/// Creator/Browser information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Creator {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            comment: String::new(),
        }
    }
}

/// Page information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "startedDateTime")]
    pub started_date_time: DateTime<FixedOffset>,
    pub id: String,
    pub title: String,
    #[serde(rename = "pageTimings", default)]
    pub page_timings: PageTimings,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Page timing information, in milliseconds since `startedDateTime`
///
/// A zero mark is treated as "not recorded" and left out of the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTimings {
    #[serde(rename = "onContentLoad", default, skip_serializing_if = "is_zero")]
    pub on_content_load: f64,
    #[serde(rename = "onLoad", default, skip_serializing_if = "is_zero")]
    pub on_load: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Individual HTTP transaction entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Id of the [`Page`] this entry belongs to; not checked against the log
    #[serde(rename = "pageref", default, skip_serializing_if = "String::is_empty")]
    pub page_ref: String,
    #[serde(rename = "startedDateTime")]
    pub started_date_time: DateTime<FixedOffset>,
    /// Total elapsed time in milliseconds
    pub time: f64,
    pub request: Request,
    pub response: Response,
    #[serde(default)]
    pub cache: Cache,
    pub timings: Timings,
    #[serde(
        rename = "serverIPAddress",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub server_ip_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub connection: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// HTTP request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub url: String,
    #[serde(rename = "httpVersion")]
    pub http_version: String,
    pub cookies: Vec<Cookie>,
    pub headers: Vec<Value>,
    #[serde(rename = "queryString")]
    pub query_string: Vec<Value>,
    #[serde(rename = "postData", default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
    #[serde(rename = "headersSize")]
    pub headers_size: i64,
    #[serde(rename = "bodySize")]
    pub body_size: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// HTTP response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: i64,
    #[serde(rename = "statusText")]
    pub status_text: String,
    #[serde(rename = "httpVersion")]
    pub http_version: String,
    pub cookies: Vec<Cookie>,
    pub headers: Vec<Value>,
    pub content: Content,
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
    #[serde(rename = "headersSize")]
    pub headers_size: i64,
    #[serde(rename = "bodySize")]
    pub body_size: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Cookie sent with a request or set by a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<FixedOffset>>,
    #[serde(rename = "httpOnly", default, skip_serializing_if = "is_false")]
    pub http_only: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub secure: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Name/value pair, used for headers and query string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Value {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: String::new(),
        }
    }
}

/// POST data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(default)]
    pub params: Vec<PostParam>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// POST parameter (form field or uploaded file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(rename = "fileName", default, skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    #[serde(
        rename = "contentType",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub content_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Response content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub size: i64,
    /// Bytes saved by compression. `None` means unknown, `Some(0)` means
    /// the body was not compressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<i64>,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub encoding: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Cache information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cache {
    // Written lowercase for compatibility with existing consumers; both
    // spellings are read.
    #[serde(
        rename = "beforerequest",
        alias = "beforeRequest",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub before_request: Option<CacheItem>,
    #[serde(rename = "afterRequest", default, skip_serializing_if = "Option::is_none")]
    pub after_request: Option<CacheItem>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Cache entry state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<FixedOffset>>,
    #[serde(rename = "lastAccess")]
    pub last_access: DateTime<FixedOffset>,
    #[serde(rename = "eTag", default, skip_serializing_if = "String::is_empty")]
    pub e_tag: String,
    #[serde(rename = "hitCount", default, skip_serializing_if = "is_zero_i64")]
    pub hit_count: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Timing information, in milliseconds
///
/// `send`, `wait` and `receive` are always written. The other phases are
/// `None` when they were not measured; HAR producers may also use `-1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<f64>,
    pub send: f64,
    pub wait: f64,
    pub receive: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}
