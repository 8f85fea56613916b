use serde::Serialize;
use tracing::Level;

/// Pretty-printed JSON for debug logs.
///
/// Returns `None` when DEBUG is disabled so callers skip serialization entirely.
pub(crate) fn debug_json<T>(value: &T) -> Option<String>
where
    T: Serialize,
{
    if !tracing::enabled!(Level::DEBUG) {
        return None;
    }
    Some(
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>")),
    )
}
