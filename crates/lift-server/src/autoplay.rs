//! The autoplay scheduler: a tokio task that ticks the session on a timer.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::handle::Session;

/// A running autoplay task and the switch that stops it.
///
/// Ticks never overlap: each tick runs under the session lock, and a tick
/// that comes due while the previous one is still waiting is skipped.
pub struct Autoplay {
    cancel: watch::Sender<bool>,
    task:   JoinHandle<()>,
}

impl Autoplay {
    /// Start ticking `session` every `period`.  The first tick is one
    /// period from now.
    pub(crate) fn spawn(session: Weak<Mutex<Session>>, period: Duration) -> Self {
        let (cancel, cancelled) = watch::channel(false);
        let task = tokio::spawn(run(session, period, cancelled));
        log::debug!("autoplay started, period {period:?}");
        Self { cancel, task }
    }

    /// Has the task stopped (completion, cancellation, or dropped session)?
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the task.  A tick already holding the lock finishes first; one
    /// still waiting for the lock sees the flag and exits without ticking.
    pub fn cancel(self) {
        // The receiver is gone if the task already exited.
        let _ = self.cancel.send(true);
        log::debug!("autoplay cancelled");
    }
}

/// Convert a speed multiplier into a tick period of `1000 / speed` ms.
pub fn period_for(speed: f64) -> Option<Duration> {
    if !speed.is_finite() || speed <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(1.0 / speed)
        .ok()
        .map(|d| d.max(Duration::from_millis(1)))
}

async fn run(session: Weak<Mutex<Session>>, period: Duration, mut cancelled: watch::Receiver<bool>) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancelled.changed() => break,
            _ = interval.tick() => {
                let Some(shared) = session.upgrade() else { break };
                let mut guard = shared.lock().await;
                if *cancelled.borrow() {
                    break;
                }
                let Some(sim) = guard.sim.as_mut() else { break };
                if sim.is_complete() {
                    log::debug!("autoplay: nothing left to deliver at {}", sim.clock);
                    break;
                }
                sim.tick();
                if sim.is_complete() {
                    log::info!("autoplay: all passengers delivered at {}", sim.clock);
                    break;
                }
            }
        }
    }
}
