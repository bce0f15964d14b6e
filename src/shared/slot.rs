//! Request tokens for last-request-wins fetch slots.
//!
//! Each slot hands out a strictly increasing token per request. A response may
//! only be applied while its token is still the slot's current one, so a slow
//! response for a superseded request is dropped instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Generation counter for one fetch slot.
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: AtomicU64,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token; every earlier token stops being current.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Supersede all in-flight requests without starting a new one.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.load(Ordering::Acquire) == token.0
    }
}
