//! Present-rate limiting for the terminal.
//!
//! The game ticks every 25 ms, but a settled board does not need to be
//! re-encoded that often. Frames are presented when something moved, when
//! the state fingerprint changed, or when the static interval elapsed.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<Presented>,
}

#[derive(Debug, Clone, Copy)]
struct Presented {
    at_ms: u64,
    fingerprint: u64,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to present a frame now.
    ///
    /// `is_static` is true when no cell animated this tick.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some(prev) => {
                prev.fingerprint != fingerprint
                    || now_ms.saturating_sub(prev.at_ms) >= self.min_static_interval_ms
            }
        };
        if render {
            self.last = Some(Presented {
                at_ms: now_ms,
                fingerprint,
            });
        }
        render
    }

    /// Forget the last frame so the next call presents.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
