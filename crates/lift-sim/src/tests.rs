//! Integration tests for lift-sim.

use lift_core::{ElevatorId, PassengerId, SimConfig, Tick};
use lift_dispatch::{DispatchPolicy, NoopDispatch, ScoredDispatch, policy_by_name};
use lift_roster::{Direction, Door, Passenger, PassengerStatus, SimulationState};

use crate::{Metrics, NoopObserver, RushHourPolicy, Sim, SimBuilder, SimObserver, Snapshot, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(elevators: u32, floors: u32, passengers: u32) -> SimConfig {
    SimConfig::default().with_counts(elevators, floors, passengers)
}

fn scored(config: SimConfig) -> Sim<ScoredDispatch> {
    SimBuilder::new(config, ScoredDispatch::default()).build().unwrap()
}

/// A sim over an explicit roster of `(origin, destination, arrival_ms)` trips.
fn with_trips(config: SimConfig, trips: &[(u32, u32, u64)]) -> Sim<ScoredDispatch> {
    let passengers = trips
        .iter()
        .enumerate()
        .map(|(slot, &(o, d, at))| Passenger::new(PassengerId::from_slot(slot), o, d, at))
        .collect();
    SimBuilder::new(config, ScoredDispatch::default())
        .passengers(passengers)
        .build()
        .unwrap()
}

fn status_of<D: DispatchPolicy>(sim: &Sim<D>, id: u32) -> PassengerStatus {
    sim.state.passenger(PassengerId(id)).map(|p| p.status).unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn generates_roster_from_config() {
        let sim = scored(config(3, 10, 20));
        assert_eq!(sim.state.elevators.len(), 3);
        assert_eq!(sim.state.passengers.len(), 20);
        assert!(sim.state.elevators.iter().all(|e| e.current_floor == 0));
    }

    #[test]
    fn rejects_degenerate_buildings() {
        for bad in [config(0, 5, 1), config(1, 1, 1), config(1, 0, 1)] {
            assert!(SimBuilder::new(bad, NoopDispatch).build().is_err());
        }
        let no_seats = SimConfig { max_capacity: 0, ..config(1, 5, 1) };
        assert!(SimBuilder::new(no_seats, NoopDispatch).build().is_err());
    }

    #[test]
    fn supplied_roster_overrides_count() {
        let sim = with_trips(config(1, 5, 99), &[(0, 4, 0), (2, 1, 0)]);
        assert_eq!(sim.config.num_passengers, 2);
        assert_eq!(sim.state.passengers.len(), 2);
    }

    #[test]
    fn roster_with_gap_in_ids_rejected() {
        let roster = vec![Passenger::new(PassengerId(2), 0, 3, 0)];
        let result = SimBuilder::new(config(1, 5, 1), NoopDispatch).passengers(roster).build();
        assert!(result.is_err());
    }

    #[test]
    fn roster_leaving_building_rejected() {
        let roster = vec![Passenger::new(PassengerId(1), 0, 5, 0)];
        let result = SimBuilder::new(config(1, 5, 1), NoopDispatch).passengers(roster).build();
        assert!(result.is_err());
    }

    #[test]
    fn roster_same_floor_trip_rejected() {
        let roster = vec![Passenger::new(PassengerId(1), 2, 2, 0)];
        let result = SimBuilder::new(config(1, 5, 1), NoopDispatch).passengers(roster).build();
        assert!(result.is_err());
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn single_trip_two_floors() {
        let mut sim = scored(config(1, 2, 1));
        let p = sim.state.passengers[0].clone();
        assert_eq!((p.origin_floor, p.destination_floor), (0, 1));

        let r = sim.tick();
        assert_eq!(r.dispatch.assigned, 1);
        assert_eq!(r.motion.boarded, 1);
        assert_eq!(status_of(&sim, 1), PassengerStatus::Boarded);
        assert_eq!(sim.state.elevators[0].door, Door::Open);

        sim.tick();
        assert_eq!(sim.state.elevators[0].current_floor, 1);
        sim.tick();
        assert_eq!(status_of(&sim, 1), PassengerStatus::Completed);

        let m = sim.snapshot().metrics;
        assert_eq!((m.completed, m.total), (1, 1));
        assert_eq!(m.avg_wait, 0.0);
        assert_eq!(m.avg_travel, 2.0);
        assert!(sim.is_complete());
    }

    #[test]
    fn empty_building_reports_zero_metrics() {
        let sim = scored(config(2, 5, 0));
        let snap = sim.snapshot();
        assert_eq!(snap.elevators.len(), 2);
        for e in &snap.elevators {
            assert_eq!(e.current_floor, 0);
            assert_eq!(e.direction, Direction::Idle);
        }
        assert_eq!((snap.metrics.completed, snap.metrics.total), (0, 0));
        assert_eq!(snap.metrics.avg_wait, 0.0);
        assert!(!snap.metrics.avg_travel.is_nan());

        let json = snap.to_json().unwrap();
        assert!(json.contains(r#""avgWait":0.0"#), "{json}");
        assert!(sim.is_complete());
    }

    #[test]
    fn full_car_leaves_second_passenger_waiting() {
        let cfg = SimConfig { max_capacity: 1, rush_hour: false, ..config(1, 5, 0) };
        let mut sim = with_trips(cfg, &[(0, 3, 0), (0, 2, 0)]);

        sim.tick();
        assert_eq!(status_of(&sim, 1), PassengerStatus::Boarded);
        assert_eq!(status_of(&sim, 2), PassengerStatus::Waiting);

        while status_of(&sim, 1) != PassengerStatus::Completed {
            assert_eq!(status_of(&sim, 2), PassengerStatus::Waiting);
            assert!(sim.state.elevators[0].load() <= 1);
            sim.tick();
        }
        let outcome = sim.run(&mut NoopObserver);
        assert!(outcome.completed);
    }

    #[test]
    fn long_wait_wins_the_last_seat() {
        let cfg = SimConfig { max_capacity: 1, rush_hour: false, ..config(1, 8, 0) };
        // Passenger 1 arrived at 35 s, passenger 2 at 0 s; it is now 40 s.
        let mut sim = with_trips(cfg, &[(3, 5, 35_000), (3, 6, 0)]);
        sim.clock.current_tick = Tick(40);

        sim.tick();
        let assigned = |id| sim.state.passenger(PassengerId(id)).and_then(|p| p.assigned_elevator);
        assert_eq!(assigned(2), Some(ElevatorId(1)));
        assert_eq!(assigned(1), None);
    }

    #[test]
    fn nearest_policy_by_name_completes() {
        let policy = policy_by_name("nearest").unwrap();
        let cfg = SimConfig { rush_hour: false, ..config(2, 8, 12) };
        let mut sim = SimBuilder::new(cfg, policy).build().unwrap();
        assert!(sim.run(&mut NoopObserver).completed);
    }

    #[test]
    fn noop_policy_hits_tick_cap() {
        let cfg = SimConfig { max_ticks: 25, ..config(1, 4, 3) };
        let mut sim = SimBuilder::new(cfg, NoopDispatch).build().unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert!(!outcome.completed);
        assert_eq!(outcome.ticks, 25);
        assert_eq!(sim.state.completed_count(), 0);
    }

    #[test]
    fn timestamps_follow_simulated_clock() {
        let cfg = SimConfig { tick_duration_ms: 500, ..config(1, 3, 0) };
        let mut sim = with_trips(cfg, &[(0, 2, 0)]);
        sim.run(&mut NoopObserver);
        let p = &sim.state.passengers[0];
        // Board on tick 0, climb on ticks 1 and 2, alight on tick 3.
        assert_eq!((p.board_ms, p.leave_ms), (Some(0), Some(1_500)));
    }
}

// ── Determinism and idempotence ───────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn same_config_same_history() {
        let cfg = SimConfig { rush_hour: false, ..config(3, 12, 30) };
        let mut a = scored(cfg.clone());
        let mut b = scored(cfg);
        for _ in 0..200 {
            assert_eq!(a.tick(), b.tick());
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn status_is_idempotent() {
        let mut sim = scored(config(2, 6, 8));
        sim.run_ticks(5, &mut NoopObserver);
        let first = sim.snapshot().to_json().unwrap();
        let second = sim.snapshot().to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_snapshot_shape() {
        let snap = Snapshot::empty();
        assert_eq!(snap.floors, 0);
        assert!(snap.elevators.is_empty() && snap.passengers.is_empty());
        assert_eq!(snap.metrics, Metrics::default());
    }
}

// ── RushHourPolicy ────────────────────────────────────────────────────────────

#[cfg(test)]
mod rush_hour {
    use super::*;

    /// Three idle cars at floors 4, 6, 8 with one passenger waiting at the lobby.
    fn rush_state() -> SimulationState {
        let cfg = config(3, 10, 0);
        let mut s = SimulationState::new(&cfg, vec![Passenger::new(PassengerId(1), 0, 5, 0)]);
        for (e, floor) in s.elevators.iter_mut().zip([4, 6, 8]) {
            e.current_floor = floor;
        }
        s
    }

    #[test]
    fn steers_only_first_car_by_default() {
        let mut s = rush_state();
        assert_eq!(RushHourPolicy::default().apply(&mut s), 1);
        assert!(s.elevators[0].has_target(0));
        assert!(!s.elevators[1].has_target(0));
    }

    #[test]
    fn bound_is_tunable() {
        let mut s = rush_state();
        assert_eq!(RushHourPolicy::new(2).apply(&mut s), 2);
        assert!(!s.elevators[2].has_target(0));
    }

    #[test]
    fn already_queued_is_not_counted() {
        let mut s = rush_state();
        s.elevators[0].queue(0);
        assert_eq!(RushHourPolicy::default().apply(&mut s), 0);
    }

    #[test]
    fn inactive_without_flag_or_lobby_demand() {
        let mut s = rush_state();
        s.rush_hour = false;
        assert_eq!(RushHourPolicy::default().apply(&mut s), 0);

        let mut s = rush_state();
        s.passengers[0].origin_floor = 3;
        assert_eq!(RushHourPolicy::default().apply(&mut s), 0);
    }

    #[test]
    fn busy_or_loaded_cars_skipped() {
        let mut s = rush_state();
        s.elevators[0].direction = Direction::Up;
        assert_eq!(RushHourPolicy::default().apply(&mut s), 0);

        let mut s = rush_state();
        s.elevators[0].passengers.insert(PassengerId(7));
        assert_eq!(RushHourPolicy::default().apply(&mut s), 0);
    }

    #[test]
    fn live_toggle_reaches_state() {
        let mut sim = scored(config(1, 4, 2));
        sim.set_rush_hour(false);
        assert!(!sim.state.rush_hour);
        assert!(!sim.config.rush_hour);
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use super::*;

    fn finished(id: u32, arrival: u64, board: u64, leave: u64) -> Passenger {
        let mut p = Passenger::new(PassengerId(id), 0, 1, arrival);
        p.board(board);
        p.complete(leave);
        p
    }

    #[test]
    fn averages_round_to_two_decimals() {
        let mut s = SimulationState::new(&config(1, 4, 0), vec![]);
        s.passengers = vec![
            finished(1, 0, 1_234, 4_000),
            finished(2, 0, 0, 1_000),
            Passenger::new(PassengerId(3), 2, 3, 0),
        ];
        let m = Metrics::collect(&s);
        assert_eq!((m.completed, m.total), (2, 3));
        assert_eq!(m.avg_wait, 0.62);
        // (2766 + 1000) / 2 = 1883 ms
        assert_eq!(m.avg_travel, 1.88);
        assert!(!m.is_complete());
    }

    #[test]
    fn stops_listed_per_elevator() {
        let mut s = SimulationState::new(&config(2, 4, 0), vec![]);
        s.elevators[1].stops = 4;
        let m = Metrics::collect(&s);
        let stops: Vec<(ElevatorId, u64)> = m.stops_per_elevator.iter().map(|e| (e.id, e.stops)).collect();
        assert_eq!(stops, vec![(ElevatorId(1), 0), (ElevatorId(2), 4)]);
    }

    #[test]
    fn serialises_camel_case() {
        let json = serde_json::to_value(Metrics::default()).unwrap();
        for key in ["avgWait", "avgTravel", "completed", "total", "stopsPerElevator"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        starts:    u64,
        ends:      u64,
        snapshots: Vec<Tick>,
        alighted:  usize,
        ended_at:  Option<Tick>,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, report: &TickReport) {
            self.ends += 1;
            self.alighted += report.motion.alighted;
        }
        fn on_snapshot(&mut self, tick: Tick, _state: &SimulationState) {
            self.snapshots.push(tick);
        }
        fn on_sim_end(&mut self, tick: Tick, _state: &SimulationState) {
            self.ended_at = Some(tick);
        }
    }

    #[test]
    fn hooks_fire_per_tick() {
        let cfg = SimConfig { output_interval_ticks: 2, ..config(2, 6, 5) };
        let mut sim = scored(cfg);
        let mut obs = Counter::default();
        let outcome = sim.run(&mut obs);

        assert!(outcome.completed);
        assert_eq!(obs.starts, outcome.ticks);
        assert_eq!(obs.ends, outcome.ticks);
        assert_eq!(obs.alighted, 5);
        assert!(obs.snapshots.iter().all(|t| t.0 % 2 == 0));
        assert_eq!(obs.snapshots.first(), Some(&Tick(0)));
        assert_eq!(obs.ended_at, Some(Tick(outcome.ticks)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let cfg = SimConfig { output_interval_ticks: 0, ..config(1, 4, 2) };
        let mut sim = scored(cfg);
        let mut obs = Counter::default();
        sim.run_ticks(10, &mut obs);
        assert!(obs.snapshots.is_empty());
        assert_eq!(obs.ended_at, None);
    }
}

// ── Tick invariants (proptest) ────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;
    use proptest::prelude::*;

    /// Every queued floor is owed to a rider or an assigned waiter, except the
    /// lobby while the rush-hour sweep is running.
    fn targets_justified(state: &SimulationState) -> bool {
        state.elevators.iter().all(|e| {
            e.target_floors.iter().all(|&f| {
                (state.rush_hour && f == state.lobby_floor)
                    || e.passengers.iter().any(|&id| {
                        state.passenger(id).is_some_and(|p| p.destination_floor == f)
                    })
                    || state.passengers.iter().any(|p| p.awaits_pickup(e.id, f))
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn ticks_preserve_invariants(
            elevators  in 1u32..4,
            floors     in 2u32..12,
            passengers in 0u32..30,
            capacity   in 1u32..6,
            rush       in any::<bool>(),
            seed       in any::<u64>(),
        ) {
            let cfg = SimConfig {
                max_capacity: capacity,
                rush_hour:    rush,
                seed,
                ..config(elevators, floors, passengers)
            };
            let mut sim = scored(cfg);
            let mut last: Vec<PassengerStatus> =
                sim.state.passengers.iter().map(|p| p.status).collect();

            let mut ticks = 0;
            while !sim.is_complete() {
                prop_assert!(ticks < 20_000, "no completion after {} ticks", ticks);
                sim.tick();
                ticks += 1;

                for e in &sim.state.elevators {
                    prop_assert!(e.load() <= e.max_capacity as usize);
                    prop_assert!(e.current_floor < floors);
                }
                for (prev, p) in last.iter_mut().zip(&sim.state.passengers) {
                    prop_assert!(p.status >= *prev, "{} regressed", p.id);
                    *prev = p.status;
                }
                prop_assert!(targets_justified(&sim.state));
            }
            prop_assert_eq!(sim.snapshot().metrics.completed, passengers as usize);
        }
    }
}
