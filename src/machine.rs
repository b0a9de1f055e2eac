use crate::table::{Resolution, TransitionTable};
use std::fmt::Debug;
use tracing::{info, warn};

/// What a [Machine] does with its state when no table row matches.
///
/// Unmatched events are recoverable by design; the policy only decides where
/// the machine sits afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum UnmatchedPolicy<S> {
    /// Keep the current state. The firmware-style default: never jump to an
    /// unknown state because of an illegal event.
    Hold,
    /// Escalate to a designated fault state.
    Fault(S),
}

/// One running instance of a machine design: a mutable current state and a
/// shared reference to the design's [TransitionTable].
///
/// The table is never mutated after construction, so any number of instances
/// may borrow the same table, concurrently if `S` and `E` allow it. The
/// instance itself belongs to a single owner; the driver that holds it
/// supplies events at its own cadence and decides when a state is terminal.
pub struct Machine<'t, S, E> {
    table: &'t TransitionTable<S, E>,
    state: S,
    policy: UnmatchedPolicy<S>,
}

impl<'t, S, E> Machine<'t, S, E>
where
    S: Clone + PartialEq + Debug,
    E: PartialEq + Debug,
{
    /// Create an instance starting in `initial`, holding state on unmatched
    /// events.
    pub fn new(table: &'t TransitionTable<S, E>, initial: S) -> Self {
        Machine {
            table,
            state: initial,
            policy: UnmatchedPolicy::Hold,
        }
    }

    /// Select the unmatched-event policy.
    pub fn with_policy(mut self, policy: UnmatchedPolicy<S>) -> Self {
        self.policy = policy;
        self
    }

    /// The current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Feed one event to the machine.
    ///
    /// On a match the transition is committed unconditionally, self-loops
    /// included (a timeout while already idle is a legitimate no-op
    /// transition). On no match the policy is applied and the returned
    /// resolution is still [Resolution::NotFound] so the caller observes the
    /// condition independently of any logging.
    pub fn step(&mut self, event: &E) -> Resolution<S> {
        let resolution = self.table.resolve(&self.state, event);

        match &resolution {
            Resolution::Found(next) => {
                info!("{:?} -> {:?}", self.state, next);
                self.state = next.clone();
            }
            Resolution::NotFound => match &self.policy {
                UnmatchedPolicy::Hold => {
                    warn!(
                        "illegal event {:?} in state {:?}, holding state",
                        event, self.state
                    );
                }
                UnmatchedPolicy::Fault(fault) => {
                    warn!(
                        "illegal event {:?} in state {:?}, escalating to {:?}",
                        event, self.state, fault
                    );
                    self.state = fault.clone();
                }
            },
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableBuilder;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Sensor {
        Idle,
        ReadSensor,
        ProcessData,
        Fault,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Event {
        CommandRx,
        ReadComplete,
        CalcSuccess,
        CalcFailure,
        Timeout,
    }

    fn sensor_table() -> TransitionTable<Sensor, Event> {
        TableBuilder::new()
            .with_transition(Sensor::Idle, Event::CommandRx, Sensor::ReadSensor)
            .with_transition(Sensor::Idle, Event::Timeout, Sensor::Idle)
            .with_transition(Sensor::ReadSensor, Event::ReadComplete, Sensor::ProcessData)
            .with_transition(Sensor::ReadSensor, Event::Timeout, Sensor::Fault)
            .with_transition(Sensor::ProcessData, Event::CalcSuccess, Sensor::Idle)
            .with_transition(Sensor::ProcessData, Event::CalcFailure, Sensor::Fault)
            .build()
            .unwrap()
    }

    #[test]
    fn failing_read_cycle_ends_in_fault() {
        let table = sensor_table();
        let mut machine = Machine::new(&table, Sensor::Idle);

        let mut trace = vec![*machine.state()];
        for event in [Event::CommandRx, Event::ReadComplete, Event::CalcFailure] {
            machine.step(&event);
            trace.push(*machine.state());
        }

        assert_eq!(
            trace,
            vec![
                Sensor::Idle,
                Sensor::ReadSensor,
                Sensor::ProcessData,
                Sensor::Fault
            ]
        );
    }

    #[test]
    fn fault_state_holds_under_any_event() {
        let table = sensor_table();
        let mut machine = Machine::new(&table, Sensor::Fault);

        for event in [
            Event::CommandRx,
            Event::ReadComplete,
            Event::CalcSuccess,
            Event::CalcFailure,
            Event::Timeout,
        ] {
            assert_eq!(machine.step(&event), Resolution::NotFound);
            assert_eq!(*machine.state(), Sensor::Fault);
        }
    }

    #[test]
    fn self_transition_is_idempotent() {
        let table = sensor_table();
        let mut machine = Machine::new(&table, Sensor::Idle);

        for _ in 0..10 {
            assert_eq!(machine.step(&Event::Timeout), Resolution::Found(Sensor::Idle));
            assert_eq!(*machine.state(), Sensor::Idle);
        }
    }

    #[test]
    fn fault_policy_escalates_on_unmatched_event() {
        let table = sensor_table();
        let mut machine = Machine::new(&table, Sensor::ProcessData)
            .with_policy(UnmatchedPolicy::Fault(Sensor::Fault));

        assert_eq!(machine.step(&Event::CommandRx), Resolution::NotFound);
        assert_eq!(*machine.state(), Sensor::Fault);
    }

    #[test]
    fn shared_table_drives_independent_instances() {
        let table = sensor_table();
        let mut a = Machine::new(&table, Sensor::Idle);
        let mut b = Machine::new(&table, Sensor::Idle);

        a.step(&Event::CommandRx);

        assert_eq!(*a.state(), Sensor::ReadSensor);
        assert_eq!(*b.state(), Sensor::Idle);

        b.step(&Event::Timeout);
        assert_eq!(*b.state(), Sensor::Idle);
    }
}
