// Embed layouts for quote and info replies

use poise::serenity_prelude as serenity;

use crate::models::quote::QuoteGroup;
use crate::utils::config::colors;
use crate::utils::formatters::truncate;

/// Discord rejects embed descriptions longer than this
const MAX_DESCRIPTION: usize = 4096;

/// Plain embed content, turned into a serenity embed right before sending
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedContent {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub footer: Option<String>,
}

impl EmbedContent {
    pub fn to_embed(&self) -> serenity::CreateEmbed {
        let embed = serenity::CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .color(self.color);

        match &self.footer {
            Some(footer) => embed.footer(serenity::CreateEmbedFooter::new(footer)),
            None => embed,
        }
    }
}

/// All quotes of one message in a single embed
pub fn quote_embed(group: &QuoteGroup) -> EmbedContent {
    let lines: Vec<String> = group
        .quotes()
        .iter()
        .map(|q| format!("“{}”\n— *{}*", q.text, q.author))
        .collect();

    EmbedContent {
        title: "📜 Quote".to_string(),
        description: truncate(&lines.join("\n\n"), MAX_DESCRIPTION),
        color: colors::QUOTE,
        footer: Some("Daily Quotes".to_string()),
    }
}

/// Current source and target channel of a guild
pub fn info_embed(source_mention: &str, target_mention: &str) -> EmbedContent {
    EmbedContent {
        title: "⚙️ Info".to_string(),
        description: format!(
            "Source channel: {}\nTarget channel: {}",
            source_mention, target_mention
        ),
        color: colors::INFO,
        footer: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quote::Quote;

    #[test]
    fn test_quote_embed_layout() {
        let group = QuoteGroup::new(vec![
            Quote::new("Do or do not.", "Yoda"),
            Quote::new("There is no try.", "Yoda"),
        ])
        .unwrap();
        let embed = quote_embed(&group);

        assert_eq!(
            embed.description,
            "“Do or do not.”\n— *Yoda*\n\n“There is no try.”\n— *Yoda*"
        );
        assert_eq!(embed.color, 0x82b6d9);
        assert_eq!(embed.footer.as_deref(), Some("Daily Quotes"));
    }

    #[test]
    fn test_long_quote_truncated() {
        let group = QuoteGroup::new(vec![Quote::new("a".repeat(5000), "Someone")]).unwrap();
        assert_eq!(quote_embed(&group).description.chars().count(), MAX_DESCRIPTION);
    }

    #[test]
    fn test_info_embed() {
        let embed = info_embed("<#1>", "<#2>");
        assert_eq!(embed.description, "Source channel: <#1>\nTarget channel: <#2>");
        assert!(embed.footer.is_none());
    }
}
