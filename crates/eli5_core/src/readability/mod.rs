//! Local readability scoring. No network, no caching: scores are cheap to
//! recompute and are always derived fresh from the current text.

/// Estimate syllables in a single word.
///
/// Heuristic: count vowel groups (a, e, i, o, u, y), drop a silent trailing
/// `e` (but keep `-le` endings), floor of one syllable per word.
pub fn syllable_count(word: &str) -> usize {
    let w: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    if w.is_empty() {
        return 0;
    }

    let mut count = 0usize;
    let mut prev_vowel = false;
    for c in w.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    if w.ends_with('e') && !w.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

/// Count words: whitespace-separated tokens containing at least one letter.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|t| t.chars().any(|c| c.is_alphabetic()))
        .count()
}

/// Count sentences: segments between terminal punctuation (`.`, `!`, `?`)
/// that contain at least one letter. Text with no terminator counts as one
/// sentence.
pub fn count_sentences(text: &str) -> usize {
    let n = text
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(|c| c.is_alphabetic()))
        .count();
    n.max(1)
}

/// Flesch-Kincaid grade level, rounded to one decimal.
///
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
///
/// Lower is simpler. Degenerate input (no words) scores 0.0. The formula can
/// go negative for very short simple text; negative grades are reported as-is.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|t| t.chars().any(|c| c.is_alphabetic()))
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let sentence_count = count_sentences(text) as f64;
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();

    let grade =
        0.39 * (word_count / sentence_count) + 11.8 * (syllables as f64 / word_count) - 15.59;
    (grade * 10.0).round() / 10.0
}
