//! Animated numeric counters
//!
//! A counter counts a displayed value up (or down) from zero toward a
//! target over roughly sixty ticks, writing every frame through a display
//! port and snapping to the exact target when its termination policy is
//! satisfied. Each animation owns its own interval; there is no shared
//! state between concurrent counters.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::utils::format;
use crate::views::DisplayPort;

const STEPS: f64 = 60.0;

/// Tick cadence of a counter animation
#[derive(Debug, Clone, Copy)]
pub struct CounterTiming {
    pub tick: Duration,
}

impl Default for CounterTiming {
    fn default() -> Self {
        CounterTiming {
            tick: Duration::from_millis(20),
        }
    }
}

/// When a counter stops ticking. The policy is chosen by the caller:
/// the balance counter converges into an epsilon window around the
/// target, the score counter stops once the running value crosses it.
#[derive(Debug, Clone, Copy)]
pub enum TerminationPolicy {
    EpsilonConvergence { epsilon: f64 },
    ThresholdCrossing,
}

/// How frames are rendered while the counter runs
#[derive(Debug, Clone, Copy)]
pub enum FrameFormat {
    /// "$1,234" frames, exact cents on the final snap
    Money,
    /// Plain floored integer frames
    Integer,
}

impl FrameFormat {
    fn frame(&self, value: f64) -> String {
        match self {
            FrameFormat::Money => format::money_frame(value),
            FrameFormat::Integer => format!("{}", value.floor() as i64),
        }
    }

    fn exact(&self, value: f64) -> String {
        match self {
            FrameFormat::Money => format::money_exact(value),
            FrameFormat::Integer => format!("{}", value.round() as i64),
        }
    }
}

/// Pure animation state: a running value converging on a target with a
/// fixed step derived from the target
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    current: f64,
    target: f64,
    step: f64,
    policy: TerminationPolicy,
}

impl CounterAnimation {
    pub fn new(target: f64, policy: TerminationPolicy) -> Self {
        CounterAnimation {
            current: 0.0,
            target,
            step: target / STEPS,
            policy,
        }
    }

    /// Advance one tick and return the new running value
    pub fn advance(&mut self) -> f64 {
        self.current += self.step;
        self.current
    }

    /// Whether the running value satisfies the termination policy.
    /// Under `ThresholdCrossing` a zero or negative target is already
    /// satisfied at the first check, so such counters stop immediately.
    pub fn is_finished(&self) -> bool {
        match self.policy {
            TerminationPolicy::EpsilonConvergence { epsilon } => {
                (self.target - self.current).abs() < epsilon
            }
            TerminationPolicy::ThresholdCrossing => self.current >= self.target,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

/// Handle to a running counter. Dropping the handle leaves the animation
/// running; `cancel` aborts the tick loop mid-flight.
pub struct CounterHandle {
    task: JoinHandle<()>,
}

impl CounterHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Wait until the animation has terminated (or was cancelled)
    pub async fn finished(self) {
        let _ = self.task.await;
    }
}

/// Start a counter animation writing frames to `port`. The loop writes
/// the floored frame every tick, then snaps the port to the exact target
/// once the policy is satisfied and stops its own interval.
pub fn spawn_counter(
    port: Arc<dyn DisplayPort>,
    target: f64,
    policy: TerminationPolicy,
    frame_format: FrameFormat,
    timing: CounterTiming,
) -> CounterHandle {
    let task = tokio::spawn(async move {
        let mut animation = CounterAnimation::new(target, policy);
        let mut ticker = tokio::time::interval(timing.tick);
        // the first interval tick completes at once; consume it so the
        // first frame lands one tick in
        ticker.tick().await;
        let mut ticks = 0u32;
        loop {
            ticker.tick().await;
            ticks += 1;
            let value = animation.advance();
            port.set_text(&frame_format.frame(value));
            if animation.is_finished() {
                port.set_text(&frame_format.exact(animation.target()));
                break;
            }
        }
        debug!(target_value = target, ticks, "counter animation finished");
    });
    CounterHandle { task }
}
