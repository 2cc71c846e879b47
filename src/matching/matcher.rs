//! Client matching rules for calendar event titles.
//!
//! Titles are free-form text, so matching runs a cascade of increasingly
//! permissive rules per client: exact substring first, then reversed name
//! order, then single-word occurrences, then dash-separated name variants.
//! Special keywords (supervision, administrative blocks) pre-empt client
//! matching entirely.

use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize;

/// Word-boundary rules only fire for name tokens with at least this many
/// characters. Shorter tokens produce too many accidental hits.
const MIN_WORD_TOKEN_CHARS: usize = 4;

/// The rule that produced a client match.
///
/// Strategies are ordered from most to least specific. The confidence
/// classification treats the whole-name strategies as strong evidence and
/// everything else as a suggestion needing human confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The title contains a configured special keyword.
    SpecialKeyword,
    /// The title contains the full normalized client name.
    FullName,
    /// The client name is a single word and the title contains it.
    SingleToken,
    /// The title contains the name with surname and first name swapped.
    ReversedName,
    /// The title contains the surname as a whole word.
    SurnameWord,
    /// The title contains the first name as a whole word.
    FirstNameWord,
    /// The title contains a dash-separated segment of the name.
    DashSegment,
}

impl MatchStrategy {
    /// Returns true for strategies that matched the whole client name or a
    /// configured keyword rather than a fragment of the name.
    pub fn is_whole_name(&self) -> bool {
        matches!(
            self,
            MatchStrategy::SpecialKeyword | MatchStrategy::FullName | MatchStrategy::SingleToken
        )
    }
}

/// A single client (or keyword) matched against an event title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMatch {
    /// The matched client name or keyword, exactly as configured.
    pub name: String,

    /// The rule that produced the match.
    pub strategy: MatchStrategy,
}

/// Matches an event title against a client roster.
///
/// Special keywords are checked first, in list order: if the normalized
/// title contains one, only that keyword is returned and no client is
/// considered. Otherwise each client is tried through the rule cascade
/// and every client that matches is returned, in roster order.
///
/// Clients whose name normalizes to the empty string, or to the same form
/// as a special keyword, are never matched. A title that normalizes to the
/// empty string matches nothing.
///
/// # Arguments
///
/// * `title` - The raw event title
/// * `client_names` - Roster client names, in display order
/// * `special_keywords` - Keywords that pre-empt client matching
///
/// # Returns
///
/// All matches found, each carrying the rule that produced it
///
/// # Examples
///
/// ```
/// use practice_engine::matching::{find_matches, MatchStrategy};
///
/// let clients = vec!["Ζωή Κουσουλού".to_string()];
/// let matches = find_matches("Κουσουλού Ζωή Ραντεβού", &clients, &[]);
///
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].strategy, MatchStrategy::ReversedName);
/// ```
pub fn find_matches(
    title: &str,
    client_names: &[String],
    special_keywords: &[String],
) -> Vec<ClientMatch> {
    let normalized_title = normalize(title);
    if normalized_title.is_empty() {
        return Vec::new();
    }

    for keyword in special_keywords {
        let normalized_keyword = normalize(keyword);
        if !normalized_keyword.is_empty() && normalized_title.contains(&normalized_keyword) {
            return vec![ClientMatch {
                name: keyword.clone(),
                strategy: MatchStrategy::SpecialKeyword,
            }];
        }
    }

    let normalized_keywords: Vec<String> = special_keywords.iter().map(|k| normalize(k)).collect();

    let mut matches = Vec::new();
    for name in client_names {
        let normalized_name = normalize(name);
        if normalized_name.is_empty() || normalized_keywords.contains(&normalized_name) {
            continue;
        }
        if let Some(strategy) = match_client(&normalized_title, name, &normalized_name) {
            matches.push(ClientMatch {
                name: name.clone(),
                strategy,
            });
        }
    }
    matches
}

/// Runs the rule cascade for one client, returning the first rule that
/// matches. `name` is the normalized form of `raw_name`.
fn match_client(title: &str, raw_name: &str, name: &str) -> Option<MatchStrategy> {
    let tokens: Vec<&str> = name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => return None,
        [single] => {
            if title.contains(single) {
                return Some(MatchStrategy::SingleToken);
            }
        }
        [first, .., last] => {
            if title.contains(name) {
                return Some(MatchStrategy::FullName);
            }
            let reversed = format!("{last} {first}");
            if title.contains(&reversed) {
                return Some(MatchStrategy::ReversedName);
            }
            if last.chars().count() >= MIN_WORD_TOKEN_CHARS && contains_word(title, last) {
                return Some(MatchStrategy::SurnameWord);
            }
            if first.chars().count() >= MIN_WORD_TOKEN_CHARS && contains_word(title, first) {
                return Some(MatchStrategy::FirstNameWord);
            }
        }
    }

    if raw_name.contains('-') {
        let segment_hit = raw_name.split('-').any(|segment| {
            let segment = normalize(segment);
            !segment.is_empty() && title.contains(&segment)
        });
        if segment_hit {
            return Some(MatchStrategy::DashSegment);
        }
    }

    None
}

/// Checks whether `needle` occurs in `haystack` bounded by non-alphanumeric
/// characters (or the ends of the string) on both sides.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(needle) {
        let start = search_from + offset;
        let end = start + needle.len();

        let bounded_before = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let bounded_after = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if bounded_before && bounded_after {
            return true;
        }

        // Advance past the first character of this occurrence.
        search_from = start + needle.chars().next().map_or(1, char::len_utf8);
    }
    false
}
