//! Structural guard against duplicate submissions.
//!
//! A screen holds one [`InFlight`] per operation. `try_begin` hands out at
//! most one live [`InFlightGuard`]; the flag clears when the guard drops,
//! whether the operation succeeded, failed, or was abandoned.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct InFlight {
    busy: RwSignal<bool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
        }
    }

    /// Tracked read, for disabling buttons and showing spinners.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Claims the operation, or returns `None` while a previous claim is live.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.busy.get_untracked() {
            return None;
        }
        self.busy.set(true);
        Some(InFlightGuard { busy: self.busy })
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
#[must_use = "the operation is released as soon as the guard is dropped"]
pub struct InFlightGuard {
    busy: RwSignal<bool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        // The owning screen may already be unmounted.
        let _ = self.busy.try_set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_second_claim_is_refused_while_first_is_live() {
        with_owner(|| {
            let flight = InFlight::new();
            let guard = flight.try_begin();
            assert!(guard.is_some());
            assert!(flight.try_begin().is_none());
            assert!(flight.busy.get_untracked());
        });
    }

    #[test]
    fn test_dropping_guard_releases_flag() {
        with_owner(|| {
            let flight = InFlight::new();
            {
                let _guard = flight.try_begin().unwrap();
            }
            assert!(!flight.busy.get_untracked());
            assert!(flight.try_begin().is_some());
        });
    }
}
