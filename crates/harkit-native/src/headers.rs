use harkit_core::har::Value;

/// Convert a name → values header collection into HAR name/value pairs
///
/// Emits one [`Value`] per header name with its values joined by `,` (no
/// space). A name with no values yields an empty string. Output follows the
/// input's iteration order, so a `HashMap` gives an arbitrary order; pass an
/// ordered collection such as a `Vec` of pairs when wire order matters.
pub fn headers_from_native<I, K, V, S>(headers: I) -> Vec<Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let converted: Vec<Value> = headers
        .into_iter()
        .map(|(name, values)| Value::new(name.as_ref(), join_values(values)))
        .collect();

    tracing::trace!("Converted {} native headers", converted.len());
    converted
}

fn join_values<V, S>(values: V) -> String
where
    V: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            joined.push(',');
        }
        joined.push_str(value.as_ref());
    }
    joined
}
