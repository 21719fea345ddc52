//! Card id normalization

/// Normalize free text into a card id.
///
/// Trims, lowercases, collapses whitespace runs into a single `-`, then drops
/// every character outside `[a-z0-9-]`.
pub fn sanitize_id(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    let mut id = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for ch in lower.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                id.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;

        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            id.push(ch);
        }
    }

    id
}

/// Strip wikilink decorations and return the bare target.
///
/// `Note|Alias` -> `Note`, `Note#Heading` -> `Note`, `Note#^block` -> `Note`.
pub fn link_target(raw: &str) -> &str {
    let without_alias = raw.split('|').next().unwrap_or(raw);
    without_alias.split('#').next().unwrap_or(without_alias)
}
