use regex::Regex;
use std::sync::LazyLock;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[\w-]*\s*").expect("valid opening fence regex"));
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("valid closing fence regex"));

/// Strip a markdown code fence from the start and end of the trimmed text.
/// Fences in the middle of the text are left alone.
pub fn strip_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if let Some(m) = OPENING_FENCE.find(s) {
        s = &s[m.end()..];
    }
    if let Some(m) = CLOSING_FENCE.find(s) {
        s = &s[..m.start()];
    }
    s.trim()
}

/// Narrow to the span between the first `[` and the last `]`, dropping prose
/// around the array. Returns the input unchanged when no such span exists.
pub fn outermost_array(s: &str) -> &str {
    match (s.find('['), s.rfind(']')) {
        (Some(start), Some(end)) if end > start => &s[start..=end],
        _ => s,
    }
}
