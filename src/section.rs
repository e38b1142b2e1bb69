use serde::Serialize;

/// One `name[/version] [(comment; comment; ...)]` unit of a User-Agent string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub version: String,
    /// Comment tokens in input order. Empty when the section has no
    /// parenthesized comment.
    pub comment: Vec<String>,
}

impl Section {
    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty()
    }
}

/// Split a User-Agent string into its sections, preserving input order.
///
/// Never fails: unbalanced parentheses or missing delimiters consume the
/// rest of the input.
pub fn tokenize(ua: &str) -> Vec<Section> {
    tokenize_bytes(ua.as_bytes())
}

/// Byte-level [`tokenize`]. Bytes that do not form valid UTF-8 once cut
/// out of the input are replaced with `U+FFFD`.
pub fn tokenize_bytes(ua: &[u8]) -> Vec<Section> {
    let mut scanner = Scanner::new(ua);
    let mut sections = Vec::new();
    while !scanner.is_done() {
        sections.push(scanner.next_section());
    }
    sections
}

/// Left-to-right cursor over the raw input bytes.
///
/// The cursor is byte-exact: the skip after `)` may land inside a
/// multibyte character, so slices are only decoded once cut.
struct Scanner<'a> {
    ua: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(ua: &'a [u8]) -> Self {
        Self { ua, pos: 0 }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.ua.len()
    }

    fn peek(&self) -> Option<u8> {
        self.ua.get(self.pos).copied()
    }

    fn next_section(&mut self) -> Section {
        let product = self.read_until(b' ', false);
        let (name, version) = split_product(product);

        let mut comment = Vec::new();
        if self.peek() == Some(b'(') {
            self.pos += 1;
            let body = self.read_until(b')', true);
            comment = split_comment(body);
            // skip the separator following ')'
            self.pos += 1;
        }

        Section {
            name: decode(name),
            version: decode(version),
            comment,
        }
    }

    /// Read until `delimiter` is found at depth zero and move the cursor past it.
    ///
    /// With `nested`, every `(` opens a level that the next `delimiter`
    /// closes instead of terminating the read. A delimiter that is never
    /// found yields the remaining input and moves the cursor past the end.
    fn read_until(&mut self, delimiter: u8, nested: bool) -> &'a [u8] {
        let start = self.pos.min(self.ua.len());
        let mut depth = 0usize;

        for (i, &b) in self.ua.iter().enumerate().skip(start) {
            if b == delimiter {
                if depth == 0 {
                    self.pos = i + 1;
                    return &self.ua[start..i];
                }
                depth -= 1;
            } else if nested && b == b'(' {
                depth += 1;
            }
        }

        self.pos = self.ua.len() + 1;
        &self.ua[start..]
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// `Name/Version` → (`Name`, `Version`); without a `/` the version is empty.
fn split_product(product: &[u8]) -> (&[u8], &[u8]) {
    match product.iter().position(|&b| b == b'/') {
        Some(slash) => (&product[..slash], &product[slash + 1..]),
        None => (product, &[][..]),
    }
}

/// Split a comment body on the literal `"; "` separator.
fn split_comment(body: &[u8]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + 1 < body.len() {
        if body[i] == b';' && body[i + 1] == b' ' {
            tokens.push(decode(&body[start..i]));
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }
    tokens.push(decode(&body[start..]));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comments(s: &Section) -> Vec<&str> {
        s.comment.iter().map(String::as_str).collect()
    }

    #[test]
    fn empty_input_has_no_sections() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn product_without_version() {
        let sections = tokenize("like Gecko");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "like");
        assert_eq!(sections[0].version, "");
        assert!(!sections[0].has_comment());
        assert_eq!(sections[1].name, "Gecko");
    }

    #[test]
    fn version_keeps_everything_after_first_slash() {
        let sections = tokenize("Foo/1.0/beta");
        assert_eq!(sections[0].name, "Foo");
        assert_eq!(sections[0].version, "1.0/beta");
    }

    #[test]
    fn comment_is_split_on_semicolon_space() {
        let sections = tokenize("Mozilla/5.0 (Windows NT 6.1; WOW64; rv:40.0) Gecko/20100101");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Mozilla");
        assert_eq!(sections[0].version, "5.0");
        assert_eq!(
            comments(&sections[0]),
            vec!["Windows NT 6.1", "WOW64", "rv:40.0"]
        );
        assert_eq!(sections[1].name, "Gecko");
        assert_eq!(sections[1].version, "20100101");
    }

    #[test]
    fn nested_parentheses_stay_in_one_comment() {
        let sections = tokenize("App/1 (a (b; c) d; e) Next/2");
        assert_eq!(comments(&sections[0]), vec!["a (b", "c) d", "e"]);
        assert_eq!(sections[1].name, "Next");
        assert_eq!(sections[1].version, "2");
    }

    #[test]
    fn unterminated_comment_consumes_rest() {
        let sections = tokenize("App/1 (Linux; x86");
        assert_eq!(sections.len(), 1);
        assert_eq!(comments(&sections[0]), vec!["Linux", "x86"]);
    }

    #[test]
    fn empty_comment_is_single_empty_token() {
        let sections = tokenize("App/1 () Other");
        assert_eq!(comments(&sections[0]), vec![""]);
        assert_eq!(sections[1].name, "Other");
    }

    #[test]
    fn repeated_spaces_yield_empty_sections() {
        let sections = tokenize("a  b");
        let names: Vec<_> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "", "b"]);
    }

    #[test]
    fn multibyte_input_is_sliced_on_ascii_delimiters() {
        let sections = tokenize("Navigateur/1.0 (Français; é) Über/2");
        assert_eq!(comments(&sections[0]), vec!["Français", "é"]);
        assert_eq!(sections[1].name, "Über");
    }

    #[test]
    fn skip_after_comment_may_split_a_character() {
        let sections = tokenize("Mozilla/5.0 (X11)Über/1");
        assert_eq!(sections.len(), 2);
        assert_eq!(comments(&sections[0]), vec!["X11"]);
        assert_eq!(sections[1].name, "\u{FFFD}ber");
        assert_eq!(sections[1].version, "1");

        let sections = tokenize("a (x)é");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].name, "\u{FFFD}");
    }

    #[test]
    fn invalid_utf8_bytes_are_replaced() {
        let sections = tokenize_bytes(b"App/\xff (\xfe; ok) B/2");
        assert_eq!(sections[0].version, "\u{FFFD}");
        assert_eq!(comments(&sections[0]), vec!["\u{FFFD}", "ok"]);
        assert_eq!(sections[1].name, "B");
    }
}
