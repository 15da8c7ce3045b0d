//! Deterministic intent classifier.
//!
//! Classification is an explicit ordered list of declarative matcher
//! rules (pattern → intent + argument extractor). The list order IS
//! the fixed intent-priority order, so trace ordering is reproducible
//! and independently testable. No learned models, no randomness.

use std::sync::LazyLock;

use regex::Regex;
use toolpilot_core::intent::{Intent, IntentMatch};
use toolpilot_tools::{knowledge_base, weather_desk};
use tracing::debug;

/// One declarative matcher rule: inspects the message and, when it
/// applies, extracts the argument its tool should operate on.
pub struct MatcherRule {
    pub intent: Intent,
    matcher: fn(&str) -> Option<String>,
}

impl MatcherRule {
    fn new(intent: Intent, matcher: fn(&str) -> Option<String>) -> Self {
        Self { intent, matcher }
    }

    /// Apply this rule to a message.
    pub fn apply(&self, message: &str) -> Option<IntentMatch> {
        (self.matcher)(message).map(|arg| IntentMatch::new(self.intent, arg))
    }
}

/// The default rule list, in the fixed priority order: Calculator,
/// WeatherDesk, KnowledgeBase, IdeaGenerator.
pub fn default_rules() -> Vec<MatcherRule> {
    vec![
        MatcherRule::new(Intent::Calculator, match_calculator),
        MatcherRule::new(Intent::WeatherDesk, match_weather),
        MatcherRule::new(Intent::KnowledgeBase, match_knowledge),
        MatcherRule::new(Intent::IdeaGenerator, match_idea),
    ]
}

/// Classify a trimmed message into an ordered list of intent matches.
/// Multiple independent rules may match the same message; each matched
/// intent is executed independently. Empty result means no tool applies.
pub fn classify(message: &str, rules: &[MatcherRule]) -> Vec<IntentMatch> {
    let matches: Vec<IntentMatch> = rules.iter().filter_map(|r| r.apply(message)).collect();
    debug!(count = matches.len(), "Classified message");
    matches
}

// ── Calculator ────────────────────────────────────────────────────────────

/// A candidate arithmetic expression: starts and ends on a digit or
/// parenthesis, with only arithmetic characters in between.
static EXPR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9(][0-9+\-*/().\s]*[0-9)]").expect("expression regex"));

fn match_calculator(message: &str) -> Option<String> {
    let candidate = EXPR_RE.find(message)?.as_str().trim();
    // A bare number is not an expression; require a binary operator.
    if candidate.chars().any(|c| matches!(c, '+' | '-' | '*' | '/')) {
        Some(candidate.to_string())
    } else {
        None
    }
}

// ── Weather desk ──────────────────────────────────────────────────────────

const WEATHER_KEYWORDS: &[&str] = &["weather", "forecast", "temperature"];

fn match_weather(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    WEATHER_KEYWORDS.iter().find(|k| contains_word(&lower, k))?;

    // First known city by left-to-right scan of the message.
    let known = weather_desk::known_cities()
        .filter_map(|city| {
            let pos = find_word(&lower, &city.to_lowercase())?;
            Some((pos, city))
        })
        .min_by_key(|(pos, _)| *pos);
    if let Some((_, city)) = known {
        return Some(city.to_string());
    }

    // No known city: take the word after "in"/"for" as a candidate so
    // the tool can report the unrecognized location itself.
    candidate_after_preposition(message)
}

/// Extract the word following "in" or "for", stripped of punctuation.
fn candidate_after_preposition(message: &str) -> Option<String> {
    let mut words = message.split_whitespace().peekable();
    while let Some(word) = words.next() {
        let w = word.to_lowercase();
        if w == "in" || w == "for" {
            if let Some(next) = words.peek() {
                let candidate: String = next
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string();
                if !candidate.is_empty() {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

// ── Knowledge base ────────────────────────────────────────────────────────

fn match_knowledge(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    // First curated keyword by left-to-right scan; its topic key
    // becomes the argument. Ambiguous messages resolve to the earliest
    // occurrence.
    knowledge_base::topic_keywords()
        .filter_map(|(keyword, topic)| {
            let pos = find_word(&lower, keyword)?;
            Some((pos, topic))
        })
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, topic)| topic.to_string())
}

// ── Idea generator ────────────────────────────────────────────────────────

const IDEA_KEYWORDS: &[&str] = &["brainstorm", "ideas", "idea", "plan", "launch", "suggest"];

/// Filler words stripped from the front of the residual topic.
const TOPIC_FILLERS: &[&str] = &["for", "about", "on", "me"];

fn match_idea(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    let (pos, keyword) = IDEA_KEYWORDS
        .iter()
        .filter_map(|k| find_word(&lower, k).map(|pos| (pos, *k)))
        .min_by_key(|(pos, _)| *pos)?;

    // Residual topic: everything after the first planning keyword,
    // minus further planning keywords, leading fillers, and trailing
    // punctuation. May be empty — the tool substitutes a generic
    // subject. Extracted from the lowercased message so the topic is
    // case-normalized like the other arguments.
    let mut rest = lower[pos + keyword.len()..].trim();
    'strip: loop {
        for word in IDEA_KEYWORDS.iter().chain(TOPIC_FILLERS) {
            if let Some(stripped) = strip_leading_word(rest, word) {
                rest = stripped;
                continue 'strip;
            }
        }
        break;
    }
    Some(rest.trim_end_matches(['?', '!', '.', ',']).trim().to_string())
}

fn strip_leading_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(word)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

// ── Word matching helpers ─────────────────────────────────────────────────

/// Position of `needle` in `haystack` as a whole word (both sides
/// bounded by non-alphanumeric characters), or None.
fn find_word(haystack: &str, needle: &str) -> Option<usize> {
    let mut start = 0;
    while let Some(rel) = haystack[start..].find(needle) {
        let pos = start + rel;
        let before_ok = pos == 0
            || !haystack[..pos]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let after = pos + needle.len();
        let after_ok = after >= haystack.len()
            || !haystack[after..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric);
        if before_ok && after_ok {
            return Some(pos);
        }
        start = pos + needle.len();
    }
    None
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    find_word(haystack, needle).is_some()
}
