//! Coin detail fetcher — coin metadata plus price history for a selected period.
//!
//! Two independent slots: the coin slot and the history slot. Each has its own
//! request token, so a period change re-fetches history without touching the
//! coin, and a slow response for an old period never replaces a newer one.

use super::{CoinApi, FetchOutcome};
use crate::domain::coin::FullCoin;
use crate::domain::history::PriceHistory;
use crate::shared::{CoinId, Loadable, RequestSlot, RequestToken, TimePeriod};

use futures_util::stream::Stream;
use std::sync::Arc;
use tokio::sync::watch;

/// State behind the coin detail view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinDetailState {
    /// Coin the view is showing.
    pub coin_id: Option<CoinId>,
    /// Period of the latest history request.
    pub period: TimePeriod,
    pub coin: Loadable<FullCoin>,
    pub history: Loadable<PriceHistory>,
}

struct Inner {
    api: Arc<dyn CoinApi>,
    coin_slot: RequestSlot,
    history_slot: RequestSlot,
    state: watch::Sender<CoinDetailState>,
}

/// Issues coin and history requests for one detail view.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct CoinDetailFetcher {
    inner: Arc<Inner>,
}

impl CoinDetailFetcher {
    pub fn new(api: Arc<dyn CoinApi>) -> Self {
        Self::with_period(api, TimePeriod::default())
    }

    /// Start on `period` instead of the default 24h.
    pub fn with_period(api: Arc<dyn CoinApi>, period: TimePeriod) -> Self {
        let (state, _) = watch::channel(CoinDetailState {
            period,
            ..CoinDetailState::default()
        });
        Self {
            inner: Arc::new(Inner {
                api,
                coin_slot: RequestSlot::new(),
                history_slot: RequestSlot::new(),
                state,
            }),
        }
    }

    /// Show `coin_id`: fetch the coin and the history for the selected period.
    ///
    /// Returns the outcomes of the coin and history fetches.
    pub async fn open(&self, coin_id: &CoinId) -> (FetchOutcome, FetchOutcome) {
        let period = self.inner.state.borrow().period;
        tokio::join!(self.fetch_coin(coin_id), self.fetch_history(coin_id, period))
    }

    /// Change the period and re-fetch history only.
    ///
    /// With no coin open, only the selection is recorded.
    pub async fn select_period(&self, period: TimePeriod) -> FetchOutcome {
        let coin_id = self.inner.state.borrow().coin_id.clone();
        match coin_id {
            Some(coin_id) => self.fetch_history(&coin_id, period).await,
            None => {
                self.inner.state.send_if_modified(|s| {
                    let changed = s.period != period;
                    s.period = period;
                    changed
                });
                FetchOutcome::Skipped
            }
        }
    }

    /// Fetch coin metadata. Loading is raised only when no coin is held yet.
    pub async fn fetch_coin(&self, coin_id: &CoinId) -> FetchOutcome {
        self.switch_to(coin_id);
        let token = self.inner.coin_slot.issue();
        self.inner.state.send_if_modified(|s| s.coin.start_if_empty());

        let result = self.inner.api.get_coin(coin_id).await;

        self.apply(coin_id, token, &self.inner.coin_slot, "coin", |s| &mut s.coin, result)
    }

    /// Fetch history for `period`. Loading is raised only when no history
    /// response has been applied yet.
    pub async fn fetch_history(&self, coin_id: &CoinId, period: TimePeriod) -> FetchOutcome {
        self.switch_to(coin_id);
        let token = self.inner.history_slot.issue();
        self.inner.state.send_if_modified(|s| {
            let changed = s.period != period;
            s.period = period;
            s.history.start_if_empty() || changed
        });

        let result = self.inner.api.get_history(coin_id, period).await;

        self.apply(
            coin_id,
            token,
            &self.inner.history_slot,
            "history",
            |s| &mut s.history,
            result,
        )
    }

    /// Tear down: drop all state and supersede in-flight requests.
    pub fn close(&self) {
        self.inner.state.send_modify(|s| {
            self.inner.coin_slot.invalidate();
            self.inner.history_slot.invalidate();
            let period = s.period;
            *s = CoinDetailState {
                period,
                ..CoinDetailState::default()
            };
        });
    }

    pub fn snapshot(&self) -> CoinDetailState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CoinDetailState> {
        self.inner.state.subscribe()
    }

    /// The current state, then every change. Ends when the fetcher is dropped.
    pub fn updates(&self) -> impl Stream<Item = CoinDetailState> + Send + 'static {
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

    /// Point the state at `coin_id`. Switching coins clears both slots and
    /// supersedes whatever was in flight for the previous coin.
    fn switch_to(&self, coin_id: &CoinId) {
        self.inner.state.send_if_modified(|s| {
            if s.coin_id.as_ref() == Some(coin_id) {
                return false;
            }
            tracing::debug!(from = ?s.coin_id, to = %coin_id, "switching detail coin");
            self.inner.coin_slot.invalidate();
            self.inner.history_slot.invalidate();
            s.coin_id = Some(coin_id.clone());
            s.coin.reset();
            s.history.reset();
            true
        });
    }

    fn apply<T>(
        &self,
        coin_id: &CoinId,
        token: RequestToken,
        slot: &RequestSlot,
        what: &'static str,
        field: impl FnOnce(&mut CoinDetailState) -> &mut Loadable<T>,
        result: Result<T, crate::error::SdkError>,
    ) -> FetchOutcome {
        let mut outcome = FetchOutcome::Superseded;
        self.inner.state.send_if_modified(|s| {
            if !slot.is_current(token) || s.coin_id.as_ref() != Some(coin_id) {
                return false;
            }
            let loadable = field(s);
            match result {
                Ok(value) => {
                    loadable.resolve(value);
                    outcome = FetchOutcome::Applied;
                }
                Err(e) => {
                    tracing::warn!(coin = %coin_id, what, error = %e, "detail fetch failed");
                    loadable.fail(e.kind());
                    outcome = FetchOutcome::Failed(e.kind());
                }
            }
            true
        });

        if outcome == FetchOutcome::Superseded {
            tracing::debug!(coin = %coin_id, what, token = token.get(), "dropping superseded response");
        }
        outcome
    }
}
