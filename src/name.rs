/// Fallback returned by [NameTable::name_of] for values outside the table.
pub const UNKNOWN: &str = "UNKNOWN";

/// A value-to-name lookup for diagnostics.
///
/// Maps each member of a closed state or event set to a stable display name.
/// Total over the representation type: anything outside the set formats as
/// [`UNKNOWN`], so it is safe to call with raw discriminants in drivers that
/// receive states or events as integers off the wire. Never used for control
/// decisions.
///
/// ```
/// use table_fsm::name::{NameTable, UNKNOWN};
///
/// let names = NameTable::new()
///     .with_name(0u8, "RED")
///     .with_name(1u8, "YELLOW")
///     .with_name(2u8, "GREEN");
///
/// assert_eq!(names.name_of(&1), "YELLOW");
/// assert_eq!(names.name_of(&7), UNKNOWN);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NameTable<T> {
    names: Vec<(T, &'static str)>,
}

impl<T> NameTable<T>
where
    T: PartialEq,
{
    pub fn new() -> Self {
        NameTable { names: Vec::new() }
    }

    /// Add a display name for `value`.
    pub fn with_name(mut self, value: T, name: &'static str) -> Self {
        self.names.push((value, name));
        self
    }

    /// The display name of `value`, or [`UNKNOWN`] if it was never named.
    pub fn name_of(&self, value: &T) -> &'static str {
        self.names
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, name)| *name)
            .unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, PartialEq)]
    enum Sensor {
        Idle,
        ReadSensor,
        ProcessData,
        Fault,
    }

    fn sensor_names() -> NameTable<Sensor> {
        NameTable::new()
            .with_name(Sensor::Idle, "IDLE")
            .with_name(Sensor::ReadSensor, "READ_SENSOR")
            .with_name(Sensor::ProcessData, "PROCESS_DATA")
            .with_name(Sensor::Fault, "FAULT")
    }

    #[test]
    fn names_are_distinct_and_non_empty() {
        let names = sensor_names();
        let all: Vec<&str> = [
            Sensor::Idle,
            Sensor::ReadSensor,
            Sensor::ProcessData,
            Sensor::Fault,
        ]
        .iter()
        .map(|s| names.name_of(s))
        .collect();

        assert!(all.iter().all(|n| !n.is_empty() && *n != UNKNOWN));
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn out_of_range_value_formats_as_unknown() {
        let names = NameTable::new().with_name(0u8, "RED").with_name(1u8, "YELLOW");
        assert_eq!(names.name_of(&0), "RED");
        assert_eq!(names.name_of(&200), UNKNOWN);
    }

    #[test]
    fn name_is_stable_across_calls() {
        let names = sensor_names();
        assert_eq!(names.name_of(&Sensor::Fault), names.name_of(&Sensor::Fault));
    }
}
