// src/core/html.rs
// Low-level HTML string helpers, deliberately naive but tailored to the
// operator site structure. Case-insensitive on ASCII tag/attribute names.

pub fn to_lower(s: &str) -> String {
    // ASCII-only lowercasing keeps byte offsets identical to the source,
    // so indices found in the lowered copy are valid in the original.
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the section between an opening tag (with attributes) and the next
/// matching closing tag. Returns the HTML *inside* the tags.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next complete `<tag ...> ... </tag>` block from `from` onwards.
/// Returns (start of opening tag, end of closing tag).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Given a complete block like `<td ...>INNER</td>`, return INNER
/// (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Remove all `<...>` tags, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Collect every `href` attribute value in the document, in order.
/// Handles single- and double-quoted values; bare values end at `>` or space.
pub fn collect_hrefs(doc: &str) -> Vec<String> {
    let lc = to_lower(doc);
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(i) = lc[pos..].find("href=") {
        let at = pos + i + "href=".len();
        let rest = &doc[at..];
        let mut chars = rest.chars();
        match chars.next() {
            Some(q @ ('"' | '\'')) => {
                if let Some(end) = rest[1..].find(q) {
                    out.push(rest[1..1 + end].to_string());
                    pos = at + 1 + end + 1;
                } else {
                    pos = at;
                }
            }
            Some(_) => {
                let end = rest.find([' ', '>']).unwrap_or(rest.len());
                if end > 0 {
                    out.push(rest[..end].to_string());
                }
                pos = at + end.max(1);
            }
            None => break,
        }
    }
    out
}
