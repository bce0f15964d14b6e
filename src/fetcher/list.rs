//! Coin list fetcher — search-driven list state.

use super::{CoinApi, FetchOutcome};
use crate::domain::coin::Coin;
use crate::shared::{Loadable, RequestSlot};

use futures_util::stream::Stream;
use std::sync::Arc;
use tokio::sync::watch;

/// State behind the coin list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinListState {
    /// Query of the latest search request.
    pub query: String,
    pub coins: Loadable<Vec<Coin>>,
}

struct Inner {
    api: Arc<dyn CoinApi>,
    slot: RequestSlot,
    state: watch::Sender<CoinListState>,
}

/// Issues search requests and holds the resulting list.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct CoinListFetcher {
    inner: Arc<Inner>,
}

impl CoinListFetcher {
    pub fn new(api: Arc<dyn CoinApi>) -> Self {
        let (state, _) = watch::channel(CoinListState::default());
        Self {
            inner: Arc::new(Inner {
                api,
                slot: RequestSlot::new(),
                state,
            }),
        }
    }

    /// Search for `query` (empty lists all coins) and replace the held list.
    ///
    /// Raises loading immediately. On failure the previous list is kept and the
    /// slot is marked failed. A response that arrives after a newer search was
    /// issued is dropped.
    pub async fn search(&self, query: &str) -> FetchOutcome {
        let token = self.inner.slot.issue();
        self.inner.state.send_modify(|s| {
            s.query = query.to_string();
            s.coins.start();
        });

        let result = self.inner.api.search_coins(query).await;

        let mut outcome = FetchOutcome::Superseded;
        self.inner.state.send_if_modified(|s| {
            if !self.inner.slot.is_current(token) {
                return false;
            }
            match result {
                Ok(coins) => {
                    tracing::debug!(query, count = coins.len(), "coin search applied");
                    s.coins.resolve(coins);
                    outcome = FetchOutcome::Applied;
                }
                Err(e) => {
                    tracing::warn!(query, error = %e, "coin search failed");
                    s.coins.fail(e.kind());
                    outcome = FetchOutcome::Failed(e.kind());
                }
            }
            true
        });

        if outcome == FetchOutcome::Superseded {
            tracing::debug!(query, token = token.get(), "dropping superseded coin search");
        }
        outcome
    }

    /// Re-run the latest query.
    pub async fn refresh(&self) -> FetchOutcome {
        let query = self.inner.state.borrow().query.clone();
        self.search(&query).await
    }

    pub fn snapshot(&self) -> CoinListState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CoinListState> {
        self.inner.state.subscribe()
    }

    /// The current state, then every change. Ends when the fetcher is dropped.
    pub fn updates(&self) -> impl Stream<Item = CoinListState> + Send + 'static {
        let mut rx = self.subscribe();
        async_stream::stream! {
            loop {
                let snapshot = rx.borrow_and_update().clone();
                yield snapshot;
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fetcher::fake::{self, FakeApi};
    use crate::shared::LoadStatus;
    use futures_util::StreamExt;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    fn fetcher() -> (Arc<FakeApi>, CoinListFetcher) {
        let api = Arc::new(FakeApi::default());
        (api.clone(), CoinListFetcher::new(api))
    }

    fn ids(state: &CoinListState) -> Vec<String> {
        state
            .coins
            .value()
            .map(|c| c.iter().map(|c| c.id.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_search_raises_then_clears_loading() {
        let (api, fetcher) = fetcher();
        let reply = api.expect_search("");

        let mut search = task::spawn(fetcher.search(""));
        assert_pending!(search.poll());
        assert!(fetcher.snapshot().coins.is_loading());

        reply.send(Ok(vec![fake::coin("btc", 1), fake::coin("eth", 2)])).unwrap();
        assert_ready_eq!(search.poll(), FetchOutcome::Applied);

        let state = fetcher.snapshot();
        assert_eq!(state.coins.status(), LoadStatus::Loaded);
        assert_eq!(ids(&state), ["btc", "eth"]);
    }

    #[tokio::test]
    async fn test_sequential_searches_replace_list() {
        let (api, fetcher) = fetcher();
        api.expect_search("b")
            .send(Ok(vec![fake::coin("btc", 1), fake::coin("bnb", 2)]))
            .unwrap();
        api.expect_search("bt").send(Ok(vec![fake::coin("btc", 1)])).unwrap();

        assert_eq!(fetcher.search("b").await, FetchOutcome::Applied);
        assert!(!fetcher.snapshot().coins.is_loading());
        assert_eq!(fetcher.search("bt").await, FetchOutcome::Applied);

        let state = fetcher.snapshot();
        assert!(!state.coins.is_loading());
        assert_eq!(state.query, "bt");
        assert_eq!(ids(&state), ["btc"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_list() {
        let (api, fetcher) = fetcher();
        api.expect_search("").send(Ok(vec![fake::coin("btc", 1)])).unwrap();
        api.expect_search("x").send(Err(fake::decode_error())).unwrap();

        fetcher.search("").await;
        let outcome = fetcher.search("x").await;

        assert_eq!(outcome, FetchOutcome::Failed(ErrorKind::Decode));
        let state = fetcher.snapshot();
        assert_eq!(state.coins.status(), LoadStatus::Failed);
        assert_eq!(state.coins.error(), Some(ErrorKind::Decode));
        assert_eq!(ids(&state), ["btc"]);
    }

    #[test]
    fn test_stale_search_response_is_dropped() {
        let (api, fetcher) = fetcher();
        let slow = api.expect_search("b");
        let fast = api.expect_search("bt");

        let mut first = task::spawn(fetcher.search("b"));
        let mut second = task::spawn(fetcher.search("bt"));
        assert_pending!(first.poll());
        assert_pending!(second.poll());

        fast.send(Ok(vec![fake::coin("btc", 1)])).unwrap();
        assert_ready_eq!(second.poll(), FetchOutcome::Applied);

        slow.send(Ok(vec![fake::coin("bnb", 2)])).unwrap();
        assert_ready_eq!(first.poll(), FetchOutcome::Superseded);

        assert_eq!(ids(&fetcher.snapshot()), ["btc"]);
        assert!(!fetcher.snapshot().coins.is_loading());
    }

    #[test]
    fn test_stale_failure_does_not_mark_failed() {
        let (api, fetcher) = fetcher();
        let slow = api.expect_search("a");
        let fast = api.expect_search("ab");

        let mut first = task::spawn(fetcher.search("a"));
        let mut second = task::spawn(fetcher.search("ab"));
        assert_pending!(first.poll());
        assert_pending!(second.poll());

        slow.send(Err(fake::transport_error())).unwrap();
        assert_ready_eq!(first.poll(), FetchOutcome::Superseded);
        assert!(fetcher.snapshot().coins.is_loading());

        fast.send(Ok(vec![])).unwrap();
        assert_ready_eq!(second.poll(), FetchOutcome::Applied);
        assert_eq!(fetcher.snapshot().coins.status(), LoadStatus::Loaded);
    }

    #[tokio::test]
    async fn test_refresh_repeats_latest_query() {
        let (api, fetcher) = fetcher();
        api.expect_search("sol").send(Ok(vec![])).unwrap();
        fetcher.search("sol").await;

        api.expect_search("sol").send(Ok(vec![fake::coin("sol", 3)])).unwrap();
        assert_eq!(fetcher.refresh().await, FetchOutcome::Applied);
        assert_eq!(ids(&fetcher.snapshot()), ["sol"]);
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn test_updates_stream_yields_transitions() {
        let (api, fetcher) = fetcher();
        let mut updates = Box::pin(fetcher.updates());

        let initial = updates.next().await.unwrap();
        assert_eq!(initial.coins.status(), LoadStatus::Idle);

        api.expect_search("").send(Ok(vec![fake::coin("btc", 1)])).unwrap();
        fetcher.search("").await;

        // Intermediate states may coalesce; the latest one is always delivered.
        let latest = updates.next().await.unwrap();
        assert_eq!(latest.coins.status(), LoadStatus::Loaded);
        assert_eq!(ids(&latest), ["btc"]);
    }
}
