use table_fsm::{Machine, NameTable, Resolution, TableBuilder};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Light {
    Red,
    Yellow,
    Green,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tick {
    Timeout,
}

fn main() {
    // Prints INFO events to STDOUT.
    tracing_subscriber::fmt::init();

    // The complete logic of the traffic light, as data.
    let table = TableBuilder::new()
        .with_transition(Light::Red, Tick::Timeout, Light::Yellow)
        .with_transition(Light::Yellow, Tick::Timeout, Light::Green)
        .with_transition(Light::Green, Tick::Timeout, Light::Red)
        .build()
        .expect("no duplicate rows");

    let names = NameTable::new()
        .with_name(Light::Red, "RED")
        .with_name(Light::Yellow, "YELLOW")
        .with_name(Light::Green, "GREEN");

    let mut light = Machine::new(&table, Light::Red);
    info!("start in {}", names.name_of(light.state()));

    // Each tick stands in for a timer expiry; the real cadence belongs to
    // whatever schedules the driver, not to the engine.
    for _ in 0..6 {
        let before = *light.state();
        match light.step(&Tick::Timeout) {
            Resolution::Found(_) => {
                info!("{} -> {}", names.name_of(&before), names.name_of(light.state()));
            }
            Resolution::NotFound => {
                info!("no transition from {} on TIMEOUT", names.name_of(&before));
            }
        }
    }

    assert_eq!(*light.state(), Light::Red);
}
