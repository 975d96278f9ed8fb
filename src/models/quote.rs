/// A single quote with its attribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// All quotes found in one message. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteGroup {
    quotes: Vec<Quote>,
}

impl QuoteGroup {
    /// Returns `None` for an empty list so empty groups can't exist
    pub fn new(quotes: Vec<Quote>) -> Option<Self> {
        if quotes.is_empty() {
            None
        } else {
            Some(Self { quotes })
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }
}

/// Quote groups of a channel, one per quote-bearing message
pub type QuoteHistory = Vec<QuoteGroup>;
