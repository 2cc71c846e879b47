//! Title and name normalization for matching.
//!
//! Event titles are typed by hand, so the same client appears as
//! "Μαρία", "ΜΑΡΙΑ", or "Μαριά" across a month of calendar entries.
//! Normalization folds case and vowel accents in both Greek and Latin
//! scripts so the matching rules compare stable forms.

/// Default number of leading words kept when building a matching key.
pub const DEFAULT_MATCH_WORD_LIMIT: usize = 2;

/// Normalizes text for comparison.
///
/// Lowercases the input, strips accents from Greek and Latin vowels,
/// drops combining marks left by decomposed input, and trims surrounding
/// whitespace. Interior whitespace is preserved.
///
/// The function is idempotent: normalizing an already-normalized string
/// returns it unchanged.
///
/// # Arguments
///
/// * `text` - The raw title or name to normalize
///
/// # Returns
///
/// The normalized form, possibly empty
///
/// # Examples
///
/// ```
/// use practice_engine::matching::normalize;
///
/// assert_eq!(normalize("  Κουσουλού Ζωή "), "κουσουλου ζωη");
/// assert_eq!(normalize("José"), "jose");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().filter_map(fold_char).collect();
    folded.trim().to_string()
}

/// Builds the matching key for an event title.
///
/// Normalizes the title, collapses runs of interior whitespace to single
/// spaces, and keeps at most `max_words` leading words. Confirmation
/// decisions are stored under this key, so "Ζωή 10:00" and "Ζωή 11:30"
/// share one decision when `max_words` is 1.
///
/// # Arguments
///
/// * `text` - The raw event title
/// * `max_words` - Maximum number of words to keep, usually
///   [`DEFAULT_MATCH_WORD_LIMIT`]
///
/// # Returns
///
/// The truncated normalized key, empty when the title has no words or
/// `max_words` is zero
pub fn normalize_for_matching(text: &str, max_words: usize) -> String {
    normalize(text)
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Folds one lowercased character, removing accents from Greek and Latin
/// vowels. Combining marks are dropped so decomposed input folds to the
/// same form as precomposed input.
fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'ά' => 'α',
        'έ' => 'ε',
        'ή' => 'η',
        'ί' | 'ϊ' | 'ΐ' => 'ι',
        'ό' => 'ο',
        'ύ' | 'ϋ' | 'ΰ' => 'υ',
        'ώ' => 'ω',
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        '\u{0300}'..='\u{036f}' => return None,
        other => other,
    };
    Some(folded)
}
