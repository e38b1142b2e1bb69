use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use crate::section::Section;

static BOT_MARKER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(["bot"])
        .expect("static bot marker must compile")
});

/// True if any comment token of any section contains "bot", ignoring ASCII case.
pub(crate) fn is_bot(sections: &[Section]) -> bool {
    sections
        .iter()
        .flat_map(|s| s.comment.iter())
        .any(|token| BOT_MARKER.is_match(token))
}
