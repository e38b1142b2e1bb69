use std::borrow::Cow;

/// Characters dropped from the end of an expanded template, so that
/// `"iOS $1.$2.$3"` with an unmatched third group reads `"iOS 9.1"`.
fn is_trailing_noise(c: char) -> bool {
    c.is_whitespace() || c == '.' || c == '_'
}

/// Expand `$1`..`$9` in `template` with the groups captured by an OS rule.
///
/// Groups that did not participate in the match expand to nothing.
pub(crate) fn expand<'t>(template: &'t str, captures: &fancy_regex::Captures) -> Cow<'t, str> {
    let mut pieces = template.split('$');
    let head = pieces.next().unwrap_or_default();

    if !template.contains('$') {
        return Cow::Borrowed(head.trim_end_matches(is_trailing_noise));
    }

    let mut out = String::with_capacity(template.len() + 16);
    out.push_str(head);
    for piece in pieces {
        match piece.as_bytes().first().copied() {
            Some(d @ b'1'..=b'9') => {
                let group = usize::from(d - b'0');
                if let Some(m) = captures.get(group) {
                    out.push_str(m.as_str());
                }
                out.push_str(&piece[1..]);
            }
            _ => {
                out.push('$');
                out.push_str(piece);
            }
        }
    }

    let keep = out.trim_end_matches(is_trailing_noise).len();
    out.truncate(keep);
    Cow::Owned(out)
}
