//! Adapters from an HTTP client's native cookie, header and URL values into
//! [`harkit_core::har`] records.
//!
//! Nothing here depends on a particular client library. Cookies are read
//! through the [`NativeCookie`] trait and headers through any iterable of
//! `(name, values)` pairs. Conversions for the `http` and `cookie` crates
//! live behind features of the same names.

mod cookies;
#[cfg(feature = "http")]
mod header_map;
mod headers;
#[cfg(feature = "cookie")]
mod parsed_cookie;
mod query;

pub use cookies::{NativeCookie, cookies_from_native};
#[cfg(feature = "http")]
pub use header_map::headers_from_header_map;
pub use headers::headers_from_native;
#[cfg(all(feature = "cookie", feature = "http"))]
pub use parsed_cookie::{request_cookies_from_header_map, response_cookies_from_header_map};
pub use query::query_string_from_url;
