//! `SimHandle`: the shared session behind every transport operation.

use std::sync::Arc;

use lift_core::SimConfig;
use lift_dispatch::{DispatchPolicy, policy_by_name};
use lift_sim::{Sim, SimBuilder, Snapshot};
use tokio::sync::Mutex;

use crate::autoplay::{Autoplay, period_for};
use crate::protocol::{Request, Response};
use crate::{ServerError, ServerResult};

/// The simulation as driven by the server.
pub type DynSim = Sim<Box<dyn DispatchPolicy>>;

/// Everything one client-visible simulation owns.
pub(crate) struct Session {
    pub(crate) sim: Option<DynSim>,
    /// Autoplay multiplier.  Survives reset.
    speed:          f64,
    /// Template for `init`; the request supplies only the three counts.
    base:           SimConfig,
    policy:         String,
    autoplay:       Option<Autoplay>,
}

impl Session {
    fn stop_autoplay(&mut self) {
        if let Some(a) = self.autoplay.take() {
            a.cancel();
        }
    }
}

/// Cheap-to-clone handle to one session.
///
/// Every operation takes the session lock for its whole duration, so an
/// observer never sees a tick half applied or an init half built.
#[derive(Clone)]
pub struct SimHandle {
    inner: Arc<Mutex<Session>>,
}

impl SimHandle {
    /// A handle with no simulation yet.  `policy` is checked here so a typo
    /// fails at startup, not at the first `init`.
    pub fn new(base: SimConfig, policy: &str, speed: f64) -> ServerResult<Self> {
        if policy_by_name(policy).is_none() {
            return Err(ServerError::UnknownPolicy(policy.to_owned()));
        }
        check_speed(speed)?;
        let session = Session {
            sim: None,
            speed,
            base,
            policy: policy.to_owned(),
            autoplay: None,
        };
        Ok(Self { inner: Arc::new(Mutex::new(session)) })
    }

    /// Run one request and build its reply.  Refusals become
    /// `{ "ok": false, "error": … }`.
    pub async fn execute(&self, request: Request) -> Response {
        let result = match request {
            Request::Init { num_elevators, num_floors, num_passengers } => self
                .init(num_elevators, num_floors, num_passengers)
                .await
                .map(|()| Response::ack()),
            Request::Status => Ok(Response::snapshot(self.status().await)),
            Request::Tick => Ok(Response::snapshot(self.tick().await)),
            Request::Speed { speed } => self.set_speed(speed).await.map(|()| Response::ack()),
            Request::Reset => {
                self.reset().await;
                Ok(Response::ack())
            }
            Request::RushHour { enabled } => {
                self.set_rush_hour(enabled).await;
                Ok(Response::ack())
            }
        };
        result.unwrap_or_else(|e| {
            log::warn!("request rejected: {e}");
            Response::rejected(e)
        })
    }

    /// Discard any prior simulation, build a fresh one, and start autoplay.
    ///
    /// Validation happens before anything is touched: on error the previous
    /// simulation (and its autoplay) keeps running.
    pub async fn init(&self, elevators: i64, floors: i64, passengers: i64) -> ServerResult<()> {
        let elevators = count("numElevators", elevators, 1, SimConfig::MAX_ELEVATORS)?;
        let floors = count("numFloors", floors, 2, SimConfig::MAX_FLOORS)?;
        let passengers = count("numPassengers", passengers, 0, SimConfig::MAX_PASSENGERS)?;

        let mut session = self.inner.lock().await;
        let config = session.base.with_counts(elevators, floors, passengers);
        let policy = policy_by_name(&session.policy)
            .ok_or_else(|| ServerError::UnknownPolicy(session.policy.clone()))?;
        let sim = SimBuilder::new(config, policy).build()?;
        let period = check_speed(session.speed)?;

        session.stop_autoplay();
        session.sim = Some(sim);
        session.autoplay = Some(Autoplay::spawn(Arc::downgrade(&self.inner), period));
        log::info!("init: {elevators} elevators, {floors} floors, {passengers} passengers");
        Ok(())
    }

    /// The current snapshot; the empty snapshot before init or after reset.
    pub async fn status(&self) -> Snapshot {
        let session = self.inner.lock().await;
        session.sim.as_ref().map_or_else(Snapshot::empty, |s| s.snapshot())
    }

    /// Advance exactly one tick and return the resulting snapshot.
    pub async fn tick(&self) -> Snapshot {
        let mut session = self.inner.lock().await;
        match session.sim.as_mut() {
            Some(sim) => {
                sim.tick();
                sim.snapshot()
            }
            None => Snapshot::empty(),
        }
    }

    /// Change the autoplay period to `1000 / speed` ms.  A running autoplay
    /// is cancelled and restarted with the new period.
    pub async fn set_speed(&self, speed: f64) -> ServerResult<()> {
        let period = check_speed(speed)?;
        let mut session = self.inner.lock().await;
        session.speed = speed;

        let running = session.autoplay.as_ref().is_some_and(|a| !a.is_finished());
        if running {
            session.stop_autoplay();
            session.autoplay = Some(Autoplay::spawn(Arc::downgrade(&self.inner), period));
        }
        log::info!("speed set to {speed}x");
        Ok(())
    }

    /// Stop autoplay and drop the simulation.  The speed is kept.
    pub async fn reset(&self) {
        let mut session = self.inner.lock().await;
        session.stop_autoplay();
        session.sim = None;
        log::info!("reset");
    }

    /// Set the morning-rush flag for the live simulation and for later inits.
    pub async fn set_rush_hour(&self, enabled: bool) {
        let mut session = self.inner.lock().await;
        session.base.rush_hour = enabled;
        if let Some(sim) = session.sim.as_mut() {
            sim.set_rush_hour(enabled);
        }
        log::info!("rush hour {}", if enabled { "on" } else { "off" });
    }

    pub async fn speed(&self) -> f64 {
        self.inner.lock().await.speed
    }

    /// Is an autoplay task currently ticking?
    pub async fn is_autoplaying(&self) -> bool {
        let session = self.inner.lock().await;
        session.autoplay.as_ref().is_some_and(|a| !a.is_finished())
    }
}

fn count(field: &str, value: i64, min: u32, max: u32) -> ServerResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| ServerError::Invalid(format!("{field} must be an integer in {min}..={max}, got {value}")))
}

fn check_speed(speed: f64) -> ServerResult<std::time::Duration> {
    period_for(speed)
        .ok_or_else(|| ServerError::Invalid(format!("speed must be a positive number, got {speed}")))
}
