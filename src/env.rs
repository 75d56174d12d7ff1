//! Snapshots of the process environment for the echo document.
//!
//! Entries are taken raw from the C `environ` table so the `KEY=VALUE`
//! splitting contract is honored even for entries the platform allows but
//! `std::env::vars` would reject, such as an entry with no `=` at all.

use std::collections::BTreeMap;

#[cfg(unix)]
unsafe extern "C" {
    static environ: *const *const libc::c_char;
}

/// Splits one raw environment entry at the first `=`.
///
/// An entry without `=` is kept as a key with an empty value rather than
/// dropped; `KEY=` yields an empty string value.
pub fn split_entry(entry: &str) -> (&str, &str) {
    match entry.split_once('=') {
        Some((key, value)) => (key, value),
        None => (entry, ""),
    }
}

/// Captures every visible environment entry as a key-value mapping.
///
/// The snapshot is taken fresh per call; concurrent readers are safe because
/// nothing in this process mutates the environment after startup.
pub fn snapshot() -> BTreeMap<String, String> {
    raw_entries()
        .iter()
        .map(|entry| {
            let (key, value) = split_entry(entry);
            (key.to_owned(), value.to_owned())
        })
        .collect()
}

#[cfg(unix)]
fn raw_entries() -> Vec<String> {
    use std::ffi::CStr;

    let mut entries = Vec::new();
    unsafe {
        let mut cursor = environ;
        while !cursor.is_null() && !(*cursor).is_null() {
            entries.push(CStr::from_ptr(*cursor).to_string_lossy().into_owned());
            cursor = cursor.add(1);
        }
    }
    entries
}

#[cfg(not(unix))]
fn raw_entries() -> Vec<String> {
    std::env::vars_os()
        .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
        .collect()
}
