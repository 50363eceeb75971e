use std::sync::LazyLock;

use regex::Regex;

static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("valid regex"));
static EDIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[edit\]").expect("valid regex"));
static LISTEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\(listen\)\s*").expect("valid regex"));
// Parenthetical asides: (e.g. ...), (i.e. ...), (etc.), (citation needed),
// and timestamp parentheticals like (at 12:30).
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*\([^)]*\b(?:e\.g\.|i\.e\.|etc\.|cit\.(?:\s*needed)?|citation needed|[\w\s]*\d+:\d+)[^)]*\)\s*",
    )
    .expect("valid regex")
});
static EMPTY_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("valid regex"));
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static WS_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").expect("valid regex"));

/// Strip Wikipedia artifacts from fetched summary text.
///
/// Removes numeric citation markers (`[1]`), `[edit]` markers, `(listen)`
/// pronunciation annotations, parenthetical asides (`(e.g. ...)`,
/// `(citation needed)`, timestamps), and empty parentheticals, then
/// collapses whitespace runs to single spaces, drops stray spaces left
/// before punctuation, and trims.
///
/// Pure and idempotent: cleaning already-clean text is a no-op.
pub fn clean_text(raw: &str) -> String {
    let text = CITATION_RE.replace_all(raw, "");
    let text = EDIT_RE.replace_all(&text, "");
    let text = LISTEN_RE.replace_all(&text, " ");
    let text = ANNOTATION_RE.replace_all(&text, " ");
    let text = EMPTY_PAREN_RE.replace_all(&text, " ");
    let text = WS_RE.replace_all(&text, " ");
    WS_PUNCT_RE.replace_all(&text, "$1").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::clean_text;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_citation_markers() {
        assert_eq!(
            clean_text("Water[1] is a compound.[12]"),
            "Water is a compound."
        );
    }

    #[test]
    fn strips_edit_and_listen_annotations() {
        assert_eq!(
            clean_text("Berlin (listen) is a city.[edit]"),
            "Berlin is a city."
        );
        assert_eq!(clean_text("Berlin (LISTEN) is a city."), "Berlin is a city.");
    }

    #[test]
    fn strips_parenthetical_asides() {
        assert_eq!(
            clean_text("Water (e.g. rain) is vital.[1] Facts here (citation needed)."),
            "Water is vital. Facts here."
        );
        assert_eq!(
            clean_text("She spoke (i.e. whispered) softly."),
            "She spoke softly."
        );
        assert_eq!(
            clean_text("The eruption (recorded at 12:30) was filmed."),
            "The eruption was filmed."
        );
        // Ordinary parentheticals survive.
        assert_eq!(
            clean_text("Water (H2O) is a compound."),
            "Water (H2O) is a compound."
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean_text("  a \t b\n\nc  "), "a b c");
    }
}
