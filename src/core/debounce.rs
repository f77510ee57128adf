/// Trailing-edge debouncer.
///
/// Every [`poke`](Self::poke) pushes the deadline out to `now + quiet_ms` and
/// hands back a ticket. A host timer armed for `quiet_ms` with that ticket
/// calls [`settle`](Self::settle), which fires only for the most recent poke;
/// a caller with its own clock can use [`poll`](Self::poll) instead.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: f64,
    deadline: Option<f64>,
    seq: u64,
}

impl Debouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            deadline: None,
            seq: 0,
        }
    }

    pub fn poke(&mut self, now_ms: f64) -> u64 {
        self.deadline = Some(now_ms + self.quiet_ms);
        self.seq += 1;
        self.seq
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire once the quiet period after the last poke has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(d) if now_ms >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire if `ticket` came from the latest poke and has not fired yet.
    pub fn settle(&mut self, ticket: u64) -> bool {
        if ticket == self.seq && self.deadline.is_some() {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
