/// Canonical form for CSV headers: no BOM or zero-width spaces, inner
/// whitespace collapsed to `_`, lowercase.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    collapsed.to_lowercase()
}
