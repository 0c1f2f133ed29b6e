// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press gesture recognition: turn pointer down/move/up into press, tap and long-press events.
//!
//! ## Usage
//!
//! 1) Feed pointer-down events into [`PressGesture::on_down`]; it reports
//!    [`PressEvent::PressStart`] so the element can highlight.
//! 2) Forward pointer moves to [`PressGesture::on_move`]. Travelling beyond the
//!    touch slop cancels the press.
//! 3) Call [`PressGesture::poll`] from your frame or timer callback so long
//!    presses are recognized while the pointer is held still.
//! 4) Finish with [`PressGesture::on_up`] (or [`PressGesture::on_cancel`] when
//!    the platform aborts the pointer stream).
//!
//! Every recognized action is preceded by [`PressEvent::PressEnd`], so the
//! highlight is always cleared before a tap or long-press handler runs.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_interaction::press::{PressEvent, PressGesture};
//!
//! let mut press = PressGesture::new();
//!
//! let events = press.on_down(Point::new(10.0, 10.0), 1_000);
//! assert_eq!(events.as_slice(), &[PressEvent::PressStart]);
//!
//! let events = press.on_up(Point::new(12.0, 11.0), 1_080);
//! assert_eq!(events.as_slice(), &[PressEvent::PressEnd, PressEvent::Tap]);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Hold duration after which a press becomes a long press, in milliseconds.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Distance the pointer may travel from the press origin before the press is cancelled.
pub const DEFAULT_TOUCH_SLOP: f64 = 18.0;

/// Events produced by [`PressGesture`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PressEvent {
    /// A press began; the element should highlight.
    PressStart,
    /// The highlight ended (release, cancellation, or long-press recognition).
    PressEnd,
    /// The press was released as a tap.
    Tap,
    /// The press was held past the long-press timeout.
    LongPress,
}

/// Events emitted by a single recognizer call.
pub type PressEvents = SmallVec<[PressEvent; 2]>;

#[derive(Copy, Clone, Debug, PartialEq)]
struct ActivePress {
    origin: Point,
    down_time: u64,
    /// Cleared once the press turned into a long press.
    highlighted: bool,
}

/// Recognizes taps and long presses for a single element.
///
/// Only one press is tracked at a time; additional pointer-down events while a
/// press is active are ignored.
#[derive(Clone, Debug)]
pub struct PressGesture {
    long_press_timeout: u64,
    slop: f64,
    active: Option<ActivePress>,
}

impl Default for PressGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl PressGesture {
    /// Create a recognizer with the default timeout and slop.
    pub fn new() -> Self {
        Self {
            long_press_timeout: DEFAULT_LONG_PRESS_TIMEOUT_MS,
            slop: DEFAULT_TOUCH_SLOP,
            active: None,
        }
    }

    /// Set the long-press timeout in milliseconds.
    #[must_use]
    pub fn with_long_press_timeout(mut self, millis: u64) -> Self {
        self.long_press_timeout = millis;
        self
    }

    /// Set the touch slop (maximum travel before cancellation).
    #[must_use]
    pub fn with_slop(mut self, slop: f64) -> Self {
        self.slop = slop;
        self
    }

    /// The configured long-press timeout in milliseconds.
    pub fn long_press_timeout(&self) -> u64 {
        self.long_press_timeout
    }

    /// The configured touch slop.
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Returns `true` while a pointer is down on the element, including after
    /// a long press was recognized.
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Returns `true` while the element should show its pressed highlight.
    pub fn is_highlighted(&self) -> bool {
        self.active.is_some_and(|a| a.highlighted)
    }

    /// Pointer went down at `pos` at `time` (milliseconds).
    pub fn on_down(&mut self, pos: Point, time: u64) -> PressEvents {
        let mut out = PressEvents::new();
        if self.active.is_none() {
            self.active = Some(ActivePress {
                origin: pos,
                down_time: time,
                highlighted: true,
            });
            out.push(PressEvent::PressStart);
        }
        out
    }

    /// Pointer moved to `pos`. Cancels the press once it leaves the slop radius.
    pub fn on_move(&mut self, pos: Point) -> PressEvents {
        let mut out = PressEvents::new();
        if let Some(active) = self.active
            && active.origin.distance(pos) > self.slop
        {
            self.active = None;
            if active.highlighted {
                out.push(PressEvent::PressEnd);
            }
        }
        out
    }

    /// Advance the clock; recognizes a long press once the timeout elapsed.
    pub fn poll(&mut self, time: u64) -> PressEvents {
        let mut out = PressEvents::new();
        if let Some(active) = self.active.as_mut()
            && active.highlighted
            && time.saturating_sub(active.down_time) >= self.long_press_timeout
        {
            active.highlighted = false;
            out.push(PressEvent::PressEnd);
            out.push(PressEvent::LongPress);
        }
        out
    }

    /// Pointer released at `pos` at `time` (milliseconds).
    ///
    /// A release that arrives after the timeout without an intervening
    /// [`poll`](Self::poll) is still reported as a long press.
    pub fn on_up(&mut self, pos: Point, time: u64) -> PressEvents {
        let mut out = self.on_move(pos);
        if !out.is_empty() {
            return out;
        }
        out = self.poll(time);
        if let Some(active) = self.active.take()
            && active.highlighted
        {
            out.push(PressEvent::PressEnd);
            out.push(PressEvent::Tap);
        }
        out
    }

    /// The platform aborted the pointer stream.
    pub fn on_cancel(&mut self) -> PressEvents {
        let mut out = PressEvents::new();
        if let Some(active) = self.active.take()
            && active.highlighted
        {
            out.push(PressEvent::PressEnd);
        }
        out
    }
}
