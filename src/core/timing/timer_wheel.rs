use std::time::Duration;

/// Purposes a one-shot deadline can be armed for.
///
/// The `Ord` derive doubles as the tie-break for deadlines expiring at the
/// same instant: earlier variants fire first, so an intro phase entered at
/// the hand-off instant is observed before the hand-off itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKey {
    HintHide,
    IntroMeeting,
    IntroHolding,
    IntroDiverging,
    IntroHandoff,
}

/// A single-threaded collection of cancellable one-shot deadlines.
///
/// Arming a key that is already armed replaces the previous deadline, which
/// gives re-arming (as in the reset operation) cancel-and-replace semantics
/// instead of two racing timers.
#[derive(Debug, Default)]
pub struct TimerWheel {
    entries: Vec<(TimerKey, Duration)>,
}

impl TimerWheel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, key: TimerKey, deadline: Duration) {
        self.cancel(key);
        self.entries.push((key, deadline));
    }

    pub fn cancel(&mut self, key: TimerKey) {
        self.entries.retain(|(armed, _)| *armed != key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_armed(&self, key: TimerKey) -> bool {
        self.entries.iter().any(|(armed, _)| *armed == key)
    }

    #[must_use]
    pub fn deadline(&self, key: TimerKey) -> Option<Duration> {
        self.entries
            .iter()
            .find(|(armed, _)| *armed == key)
            .map(|(_, deadline)| *deadline)
    }

    /// Removes and returns every key whose deadline has passed, ordered by
    /// deadline and then by key.
    pub fn expire(&mut self, now: Duration) -> Vec<TimerKey> {
        let mut due: Vec<(TimerKey, Duration)> = Vec::new();
        self.entries.retain(|entry| {
            if entry.1 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });

        due.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        due.into_iter().map(|(key, _)| key).collect()
    }
}
