use table_fsm::{Machine, NameTable, Resolution, TableBuilder};
use tracing::{info, warn};

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

fn main() {
    tracing_subscriber::fmt::init();

    let table = TableBuilder::new()
        .with_transition(Sensor::Idle, Event::CommandRx, Sensor::ReadSensor)
        // Stay in IDLE on timeout.
        .with_transition(Sensor::Idle, Event::Timeout, Sensor::Idle)
        .with_transition(Sensor::ReadSensor, Event::ReadComplete, Sensor::ProcessData)
        // A timeout mid-read is a critical failure.
        .with_transition(Sensor::ReadSensor, Event::Timeout, Sensor::Fault)
        .with_transition(Sensor::ProcessData, Event::CalcSuccess, Sensor::Idle)
        .with_transition(Sensor::ProcessData, Event::CalcFailure, Sensor::Fault)
        .build()
        .expect("no duplicate rows");

    let names = NameTable::new()
        .with_name(Sensor::Idle, "IDLE")
        .with_name(Sensor::ReadSensor, "READ_SENSOR")
        .with_name(Sensor::ProcessData, "PROCESS_DATA")
        .with_name(Sensor::Fault, "FAULT");

    // A canned event vector standing in for command and sensor interrupts.
    // The last two events are illegal once the machine has faulted.
    let events = [
        Event::CommandRx,
        Event::ReadComplete,
        Event::CalcFailure,
        Event::CalcSuccess,
        Event::Timeout,
    ];

    let mut machine = Machine::new(&table, Sensor::Idle);
    info!("initial state: {}", names.name_of(machine.state()));

    for (step, event) in events.iter().enumerate() {
        let before = *machine.state();
        match machine.step(event) {
            Resolution::Found(_) => {
                info!(
                    "step {}: {:?}: {} -> {}",
                    step + 1,
                    event,
                    names.name_of(&before),
                    names.name_of(machine.state()),
                );
            }
            Resolution::NotFound => {
                warn!(
                    "step {}: {:?} is illegal in {}, staying put",
                    step + 1,
                    event,
                    names.name_of(&before),
                );
            }
        }

        // Cooperative stop condition; the engine does not treat any state as
        // terminal on its own.
        if *machine.state() == Sensor::Fault {
            warn!("halted in {}", names.name_of(machine.state()));
            break;
        }
    }
}
