// Quote extraction, selection and counting

use futures::{pin_mut, Stream, StreamExt};
use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;

use crate::models::quote::{Quote, QuoteGroup, QuoteHistory};

/// `"quote text"` followed by one or more line breaks, then a line starting
/// with `-` or `~` (leading spaces allowed) and the author up to end of line
static QUOTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]+)"\n+[ \t]*[-~]\s*(.+)"#).expect("quote pattern is valid")
});

/// Extract every quote in a single message, if it has any
pub fn extract_group(content: &str) -> Option<QuoteGroup> {
    let quotes = QUOTE_REGEX
        .captures_iter(content)
        .map(|caps| Quote::new(&caps[1], &caps[2]))
        .collect();

    QuoteGroup::new(quotes)
}

/// Extract quote groups from a sequence of message texts.
/// Messages without a well-formed quote contribute nothing.
#[allow(dead_code)]
pub fn extract<I, S>(messages: I) -> Vec<QuoteGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .filter_map(|content| extract_group(content.as_ref()))
        .collect()
}

/// Extract quote groups from a stream of message texts, keeping only the
/// matches. Returns the groups and how many messages were scanned.
/// Stops at the first stream error.
pub async fn extract_stream<St, E>(messages: St) -> Result<(QuoteHistory, usize), E>
where
    St: Stream<Item = Result<String, E>>,
{
    pin_mut!(messages);
    let mut history = QuoteHistory::new();
    let mut scanned = 0usize;

    while let Some(content) = messages.next().await {
        scanned += 1;
        if let Some(group) = extract_group(&content?) {
            history.push(group);
        }
    }

    Ok((history, scanned))
}

/// Pick one group uniformly. Every message weighs the same no matter how
/// many quotes it holds.
pub fn select_random<'a, R>(history: &'a [QuoteGroup], rng: &mut R) -> Option<&'a QuoteGroup>
where
    R: Rng + ?Sized,
{
    history.choose(rng)
}

/// Total number of individual quotes (not messages)
pub fn count(history: &[QuoteGroup]) -> usize {
    history.iter().map(QuoteGroup::len).sum()
}
