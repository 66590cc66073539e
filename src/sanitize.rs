//! String helpers that keep element names and labels from being read as diagram syntax.

use indexmap::IndexMap;

/// Maps an element name to a node identifier: anything outside `[A-Za-z0-9_]` becomes `_`.
///
/// Distinct names can map to the same identifier (`a-b` and `a.b`); see [`find_id_collisions`].
pub fn sanitize_id(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Rewrites characters that would close a node shape or open a new one.
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push('\''),
            '[' | '{' => out.push('('),
            ']' | '}' => out.push(')'),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Element names that sanitize to the same node identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCollision {
    pub id: String,
    pub names: Vec<String>,
}

/// Groups names by sanitized identifier and returns every group with more than one member,
/// in order of first appearance. Collisions are reported, never resolved.
pub fn find_id_collisions<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<IdCollision> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for name in names {
        groups
            .entry(sanitize_id(name))
            .or_default()
            .push(name.to_string());
    }
    groups
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(id, names)| IdCollision { id, names })
        .collect()
}
