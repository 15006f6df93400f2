use std::time::{Duration, Instant};

use region_search::Coordinate;

const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
struct View {
    center: Coordinate,
    zoom: f64,
}

impl View {
    fn same_as(&self, other: &View) -> bool {
        (self.center.latitude - other.center.latitude).abs() < EPSILON
            && (self.center.longitude - other.center.longitude).abs() < EPSILON
            && (self.zoom - other.zoom).abs() < EPSILON
    }
}

/// Turns the per-frame map state into "viewport settled" events.
///
/// An event fires once the user has stopped interacting and the view has
/// stayed the same for `settle_after`, and only if it differs from the last
/// settled view. The first observed view is the starting point and does not
/// fire.
pub struct ViewportWatcher {
    settle_after: Duration,
    settled: Option<View>,
    pending: Option<(View, Instant)>,
}

impl ViewportWatcher {
    pub fn new(settle_after: Duration) -> Self {
        Self {
            settle_after,
            settled: None,
            pending: None,
        }
    }

    /// Whether a moved view is waiting to settle.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn observe(
        &mut self,
        center: Coordinate,
        zoom: f64,
        interacting: bool,
        now: Instant,
    ) -> Option<Coordinate> {
        let view = View { center, zoom };

        let settled = match self.settled {
            Some(settled) => settled,
            None => {
                self.settled = Some(view);
                return None;
            }
        };

        if interacting {
            self.pending = None;
            return None;
        }

        if view.same_as(&settled) {
            self.pending = None;
            return None;
        }

        match self.pending {
            Some((pending, since)) if pending.same_as(&view) => {
                if now.duration_since(since) >= self.settle_after {
                    self.settled = Some(view);
                    self.pending = None;
                    Some(center)
                } else {
                    None
                }
            }
            _ => {
                self.pending = Some((view, now));
                None
            }
        }
    }
}
