// Quote relay: scan the source channel, pick a quote, post it

use std::future::Future;

use tracing::{debug, info};

use crate::features::channels::{self, ChannelCapabilities, ChatPlatform, Resolution};
use crate::features::quotes;
use crate::models::guild::GuildConfig;
use crate::models::quote::QuoteGroup;
use crate::utils::embeds;

/// Result of a `/quote` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOutcome {
    NotConfigured,
    Unresolved,
    /// Source channel (mention) holds no quotes
    NoQuotes(String),
    /// Posted to this target channel (mention)
    Sent(String),
}

/// Result of a `/total_quotes` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountOutcome {
    NotConfigured,
    Unresolved,
    Counted { total: usize, source: String },
}

/// Full `/quote` flow for one guild.
///
/// `before_scan` runs only once both channels resolved, right before the
/// history scan; the command passes its deferred acknowledgement here.
pub async fn quote_for_guild<P, D, E>(
    platform: &P,
    config: &GuildConfig,
    before_scan: D,
) -> anyhow::Result<QuoteOutcome>
where
    P: ChatPlatform,
    D: Future<Output = Result<(), E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let (source, target) = match channels::resolve(platform, config).await {
        Resolution::Ready(pair) => pair,
        Resolution::Unconfigured => return Ok(QuoteOutcome::NotConfigured),
        Resolution::Unresolved => return Ok(QuoteOutcome::Unresolved),
    };

    before_scan.await?;

    Ok(match relay_random_quote(platform, &source, &target).await? {
        Some(_) => QuoteOutcome::Sent(target.mention()),
        None => QuoteOutcome::NoQuotes(source.mention()),
    })
}

/// Full `/total_quotes` flow for one guild. Only the source channel is needed.
pub async fn count_for_guild<P, D, E>(
    platform: &P,
    config: &GuildConfig,
    before_scan: D,
) -> anyhow::Result<CountOutcome>
where
    P: ChatPlatform,
    D: Future<Output = Result<(), E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let source = match channels::resolve_source(platform, config).await {
        Resolution::Ready(source) => source,
        Resolution::Unconfigured => return Ok(CountOutcome::NotConfigured),
        Resolution::Unresolved => return Ok(CountOutcome::Unresolved),
    };

    before_scan.await?;

    Ok(CountOutcome::Counted {
        total: total_quotes(platform, &source).await?,
        source: source.mention(),
    })
}

/// Post a random quote group from `source` to `target`.
/// Returns `None` without posting when the source has no quotes.
pub async fn relay_random_quote<P: ChatPlatform>(
    platform: &P,
    source: &P::Channel,
    target: &P::Channel,
) -> anyhow::Result<Option<QuoteGroup>> {
    let history = platform.quote_history(source).await?;
    debug!("Found {} quote messages in {}", history.len(), source.mention());

    let picked = {
        let mut rng = rand::rng();
        quotes::select_random(&history, &mut rng).cloned()
    };
    let Some(group) = picked else {
        return Ok(None);
    };

    platform
        .post_embed(target, &embeds::quote_embed(&group))
        .await?;
    info!(
        "Relayed {} quote(s) from {} to {}",
        group.len(),
        source.mention(),
        target.mention()
    );

    Ok(Some(group))
}

/// Number of individual quotes in `source`
pub async fn total_quotes<P: ChatPlatform>(
    platform: &P,
    source: &P::Channel,
) -> anyhow::Result<usize> {
    let history = platform.quote_history(source).await?;
    Ok(quotes::count(&history))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::features::channels::testing::{FakeChannel, FakePlatform};

    fn config(source: Option<u64>, target: Option<u64>) -> GuildConfig {
        GuildConfig {
            source_channel: source,
            target_channel: target,
            ..GuildConfig::with_admin("1")
        }
    }

    async fn mark(flag: &AtomicBool) -> Result<(), std::io::Error> {
        flag.store(true, Ordering::SeqCst);
        Ok(())
    }

    #[tokio::test]
    async fn test_relays_to_target() {
        let source = FakeChannel::text(1, &["chatter", "\"Do or do not.\"\n-Yoda"]);
        let target = FakeChannel::text(2, &[]);
        let platform = FakePlatform::with(vec![source.clone(), target.clone()]);

        let group = relay_random_quote(&platform, &source, &target)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(group.quotes()[0].text, "Do or do not.");
        let posted = platform.posted();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, 2);
        assert_eq!(posted[0].1.description, "“Do or do not.”\n— *Yoda*");
    }

    #[tokio::test]
    async fn test_unconfigured_guild_gets_no_post() {
        let platform = FakePlatform::with(vec![FakeChannel::text(1, &["\"a\"\n-b"])]);
        let deferred = AtomicBool::new(false);

        let outcome = quote_for_guild(&platform, &config(Some(1), None), mark(&deferred))
            .await
            .unwrap();

        assert_eq!(outcome, QuoteOutcome::NotConfigured);
        assert!(platform.fetched().is_empty());
        assert!(platform.posted().is_empty());
        assert!(!deferred.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_unresolved_channel_gets_no_post() {
        let platform = FakePlatform::with(vec![FakeChannel::text(1, &["\"a\"\n-b"])]);
        let deferred = AtomicBool::new(false);

        let outcome = quote_for_guild(&platform, &config(Some(1), Some(404)), mark(&deferred))
            .await
            .unwrap();

        assert_eq!(outcome, QuoteOutcome::Unresolved);
        assert!(platform.posted().is_empty());
        assert!(!deferred.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_empty_history_reports_no_quotes() {
        let platform = FakePlatform::with(vec![
            FakeChannel::text(1, &["no quotes", "\"broken\n-x"]),
            FakeChannel::text(2, &[]),
        ]);
        let deferred = AtomicBool::new(false);

        let outcome = quote_for_guild(&platform, &config(Some(1), Some(2)), mark(&deferred))
            .await
            .unwrap();

        assert_eq!(outcome, QuoteOutcome::NoQuotes("<#1>".to_string()));
        assert!(platform.posted().is_empty());
        assert!(deferred.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_quote_sent_to_target() {
        let platform = FakePlatform::with(vec![
            FakeChannel::text(1, &["\"Do or do not.\"\n-Yoda"]),
            FakeChannel::text(2, &[]),
        ]);
        let deferred = AtomicBool::new(false);

        let outcome = quote_for_guild(&platform, &config(Some(1), Some(2)), mark(&deferred))
            .await
            .unwrap();

        assert_eq!(outcome, QuoteOutcome::Sent("<#2>".to_string()));
        assert_eq!(platform.posted().len(), 1);
        assert_eq!(platform.posted()[0].0, 2);
    }

    #[tokio::test]
    async fn test_failed_deferral_stops_before_scan() {
        let platform = FakePlatform::with(vec![
            FakeChannel::text(1, &["\"a\"\n-b"]),
            FakeChannel::text(2, &[]),
        ]);
        let failing = async { Err::<(), _>(std::io::Error::other("interaction expired")) };

        assert!(quote_for_guild(&platform, &config(Some(1), Some(2)), failing)
            .await
            .is_err());
        assert!(platform.posted().is_empty());
    }

    #[tokio::test]
    async fn test_count_outcomes() {
        let platform = FakePlatform::with(vec![
            FakeChannel::text(1, &["\"a\"\n-b\n\"c\"\n-d", "hello", "\"e\"\n~f"]),
            FakeChannel::text(2, &[]),
        ]);
        let deferred = AtomicBool::new(false);

        // Target is not needed for counting
        let outcome = count_for_guild(&platform, &config(Some(1), None), mark(&deferred))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            CountOutcome::Counted {
                total: 3,
                source: "<#1>".to_string()
            }
        );

        let empty = count_for_guild(&platform, &config(Some(2), None), mark(&deferred))
            .await
            .unwrap();
        assert_eq!(
            empty,
            CountOutcome::Counted {
                total: 0,
                source: "<#2>".to_string()
            }
        );

        let unset = count_for_guild(&platform, &config(None, Some(2)), mark(&deferred))
            .await
            .unwrap();
        assert_eq!(unset, CountOutcome::NotConfigured);
    }
}
