// Formatting utilities

/// Discord channel mention, e.g. `<#123>`
pub fn channel_mention(channel_id: u64) -> String {
    format!("<#{}>", channel_id)
}

/// "There is 1 quote in ..." / "There are 3 quotes in ..."
pub fn total_quotes_message(total: usize, source_mention: &str) -> String {
    let (verb, plural) = if total == 1 { ("is", "") } else { ("are", "s") };
    format!("There {} {} quote{} in {}", verb, total, plural, source_mention)
}

pub fn no_quotes_message(source_mention: &str) -> String {
    format!("No quotes found in {}!", source_mention)
}

pub fn quote_sent_message(target_mention: &str) -> String {
    format!("Quote sent to {}!", target_mention)
}

pub fn channel_updated_message(label: &str, mention: &str) -> String {
    format!("Successfully changed the {} channel to {}!", label, mention)
}

/// Truncate string to max length (in chars) with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
