use dragscroll::ScrollDirection;

/// A cancellable periodic repeat for press-and-hold controls.
///
/// Adapter-driven: `start` when the control is pressed, `poll(now_ms)` from the frame/timer loop,
/// `stop` on release. After `stop` no further repeats are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldRepeat {
    interval_ms: u64,
    active: Option<Hold>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Hold {
    direction: ScrollDirection,
    next_ms: u64,
}

impl HoldRepeat {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            active: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    /// Arms the repeat. The first repeat is due one interval after `now_ms`; the press itself is
    /// the caller's to handle.
    pub fn start(&mut self, direction: ScrollDirection, now_ms: u64) {
        dtrace!(?direction, now_ms, "HoldRepeat::start");
        self.active = Some(Hold {
            direction,
            next_ms: now_ms.saturating_add(self.interval_ms),
        });
    }

    /// Cancels the repeat. Returns `true` if it was armed.
    pub fn stop(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        if was_active {
            dtrace!("HoldRepeat::stop");
        }
        was_active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.active.map(|h| h.direction)
    }

    /// Returns how many repeats came due by `now_ms` and advances the schedule past them.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let interval = self.interval_ms;
        let Some(hold) = self.active.as_mut() else {
            return 0;
        };
        if now_ms < hold.next_ms {
            return 0;
        }
        let due = (now_ms - hold.next_ms) / interval + 1;
        hold.next_ms = hold
            .next_ms
            .saturating_add(due.saturating_mul(interval));
        u32::try_from(due).unwrap_or(u32::MAX)
    }
}

impl Default for HoldRepeat {
    fn default() -> Self {
        Self::new(50)
    }
}
