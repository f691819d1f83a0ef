use crate::headers::headers_from_native;
use harkit_core::har::Value;
use http::HeaderMap;

/// Convert an `http::HeaderMap` into HAR name/value pairs
///
/// Values sharing a name are comma-joined, names come out in the map's key
/// order and in the lowercase form `http` stores. Values that are not valid
/// UTF-8 are converted lossily.
pub fn headers_from_header_map(headers: &HeaderMap) -> Vec<Value> {
    headers_from_native(headers.keys().map(|name| {
        let values = headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()));
        (name.as_str(), values)
    }))
}
