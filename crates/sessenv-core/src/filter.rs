//! Projection of a raw environment listing onto requested variable names.

use std::collections::HashMap;

/// Variables exported when the caller names none: the well-known session
/// handles a remote or terminal shell usually wants.
pub const DEFAULT_VAR_NAMES: [&str; 3] = ["DBUS_SESSION_BUS_ADDRESS", "DISPLAY", "SSH_AUTH_SOCK"];

/// Parse raw `NAME=VALUE` entries into a name→value map.
///
/// Only the first `=` splits; values may themselves contain `=`. Entries
/// without an `=` are malformed and discarded. On duplicate names the last
/// occurrence wins (real environment blocks should never contain duplicates;
/// this path is defensive only).
pub fn parse_entries(raw: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for entry in raw {
        if let Some((name, value)) = entry.split_once('=') {
            map.insert(name.to_string(), value.to_string());
        }
    }
    map
}

/// Project the raw listing onto `requested`, preserving request order.
///
/// Requested names absent from the environment are omitted, never emitted as
/// empty values. Total over its inputs; no error conditions.
pub fn filter_environment(raw: &[String], requested: &[String]) -> Vec<(String, String)> {
    let map = parse_entries(raw);
    requested
        .iter()
        .filter_map(|name| map.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}
