/// One-shot countdown advanced by frame time.
///
/// Arming always replaces the pending deadline, so a timer can never fire twice
/// for overlapping arms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Countdown {
    remaining: Option<f64>,
}

impl Countdown {
    pub fn armed(secs: f64) -> Self {
        Self {
            remaining: Some(secs.max(0.0)),
        }
    }

    /// Clear any pending deadline, then start a new one.
    pub fn arm(&mut self, secs: f64) {
        self.clear();
        self.remaining = Some(secs.max(0.0));
    }

    pub fn clear(&mut self) {
        self.remaining = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt` seconds; returns true exactly once when the deadline passes.
    pub fn tick(&mut self, dt: f64) -> bool {
        match self.remaining {
            Some(r) => {
                let left = r - dt.max(0.0);
                if left <= 0.0 {
                    self.remaining = None;
                    true
                } else {
                    self.remaining = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}
