//! Chart state and the event reducer driving axis-selection changes.
//!
//! All mutable chart state lives in [`ChartState`] and is only changed by
//! [`ChartState::apply`], so the UI layer stays a thin event source: widgets
//! emit a [`ChartEvent`], the reducer decides what (if anything) changes, and
//! rendering reads the resulting state back.

use crate::data::dataset::Dataset;
use crate::data::dimension::{XDimension, YDimension};
use crate::scale::{ease_cubic_in_out, lerp_domain, padded_domain};

/// Duration of one axis transition, in seconds.
pub const TRANSITION_SECS: f64 = 1.0;

/// Animated interpolation between two scale domains.
///
/// A motion is either settled (displaying its target domain) or in flight,
/// easing from `from` to `to` over [`TRANSITION_SECS`]. Retargeting an
/// in-flight motion restarts the interpolation from whatever domain is
/// currently displayed, so a click landing mid-transition never snaps the
/// chart back to the old settled state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMotion {
    from: (f64, f64),
    to: (f64, f64),
    start: f64,
}

impl AxisMotion {
    /// A motion already settled at `domain` (no animation pending).
    pub fn settled(domain: (f64, f64)) -> Self {
        Self {
            from: domain,
            to: domain,
            start: f64::NEG_INFINITY,
        }
    }

    /// The domain this motion is heading toward (equals the displayed domain
    /// once settled).
    pub fn target(&self) -> (f64, f64) {
        self.to
    }

    /// The domain displayed at time `now`.
    pub fn domain_at(&self, now: f64) -> (f64, f64) {
        let t = (now - self.start) / TRANSITION_SECS;
        if t >= 1.0 {
            return self.to;
        }
        lerp_domain(self.from, self.to, ease_cubic_in_out(t))
    }

    /// Whether the motion has finished animating at time `now`.
    pub fn is_settled(&self, now: f64) -> bool {
        now >= self.start + TRANSITION_SECS
    }

    /// Begin a new transition toward `domain`, starting from the domain
    /// displayed at `now`.
    pub fn retarget(&mut self, now: f64, domain: (f64, f64)) {
        self.from = self.domain_at(now);
        self.to = domain;
        self.start = now;
    }
}

/// User-driven chart events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    SelectX(XDimension),
    SelectY(YDimension),
}

/// The chart's full mutable state: one active dimension per axis plus the
/// per-axis domain motion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub x_dim: XDimension,
    pub y_dim: YDimension,
    pub x_motion: AxisMotion,
    pub y_motion: AxisMotion,
}

impl ChartState {
    /// Initial state: poverty vs. obesity, both axes settled at their padded
    /// domains.
    pub fn new(data: &Dataset) -> Self {
        let x_dim = XDimension::default();
        let y_dim = YDimension::default();
        Self {
            x_dim,
            y_dim,
            x_motion: AxisMotion::settled(padded_domain(data.x_values(x_dim))),
            y_motion: AxisMotion::settled(padded_domain(data.y_values(y_dim))),
        }
    }

    /// The X domain displayed at time `now`.
    pub fn x_domain_at(&self, now: f64) -> (f64, f64) {
        self.x_motion.domain_at(now)
    }

    /// The Y domain displayed at time `now`.
    pub fn y_domain_at(&self, now: f64) -> (f64, f64) {
        self.y_motion.domain_at(now)
    }

    /// Whether either axis is still animating at time `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        !self.x_motion.is_settled(now) || !self.y_motion.is_settled(now)
    }

    /// Apply one event. Returns `true` if the state changed.
    ///
    /// Selecting the dimension already bound to an axis is a no-op: the
    /// selection, domain, and motion are left untouched. A valid selection
    /// changes only its own axis; the other axis keeps its selection and its
    /// (possibly in-flight) motion.
    pub fn apply(&mut self, data: &Dataset, event: ChartEvent, now: f64) -> bool {
        match event {
            ChartEvent::SelectX(dim) => {
                if dim == self.x_dim {
                    return false;
                }
                self.x_dim = dim;
                self.x_motion
                    .retarget(now, padded_domain(data.x_values(dim)));
                true
            }
            ChartEvent::SelectY(dim) => {
                if dim == self.y_dim {
                    return false;
                }
                self.y_dim = dim;
                self.y_motion
                    .retarget(now, padded_domain(data.y_values(dim)));
                true
            }
        }
    }

    /// Recompute both domains from a freshly loaded record set without
    /// animating. Used when the dataset itself is replaced.
    pub fn reset(&mut self, data: &Dataset) {
        self.x_motion = AxisMotion::settled(padded_domain(data.x_values(self.x_dim)));
        self.y_motion = AxisMotion::settled(padded_domain(data.y_values(self.y_dim)));
    }
}
