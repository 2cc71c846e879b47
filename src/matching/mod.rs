//! Client matching for calendar event titles.
//!
//! This module turns free-form event titles into client attributions:
//! normalization folds case and accents across Greek and Latin scripts,
//! the matcher runs the rule cascade against a roster, and the candidate
//! types classify how much confidence each attribution deserves.

mod candidate;
mod matcher;
mod normalize;

pub use candidate::{MatchCandidate, MatchConfidence};
pub use matcher::{find_matches, ClientMatch, MatchStrategy};
pub use normalize::{normalize, normalize_for_matching, DEFAULT_MATCH_WORD_LIMIT};
