use crate::server::model::db::MachineModel;

/// Checks whether `serial_number` is already used by a machine other than `exclude_id`.
///
/// Serial numbers are compared case-insensitively and otherwise exactly. The check only
/// sees the supplied snapshot; obtaining a consistent snapshot is up to the caller, and the
/// unique index on `LOWER(machine.serial_number)` remains the final guard against concurrent
/// writers.
///
/// # Arguments
/// - `serial_number` - Serial number of the candidate machine
/// - `exclude_id` - ID of the machine being updated, `None` when adding a new machine
/// - `machines` - Snapshot of all stored machines
///
/// # Returns
/// - `true` - Another machine already uses this serial number
/// - `false` - The serial number is free
pub fn is_duplicate_serial(
    serial_number: &str,
    exclude_id: Option<i32>,
    machines: &[MachineModel],
) -> bool {
    let serial_number = serial_number.to_lowercase();

    machines.iter().any(|machine| {
        Some(machine.id) != exclude_id && machine.serial_number.to_lowercase() == serial_number
    })
}

#[cfg(test)]
mod tests {
    use plantwatch_test_utils::fixtures::machine::factory::mock_machine_model;

    use super::is_duplicate_serial;

    /// Expect a match regardless of letter case
    #[test]
    fn detects_duplicate_ignoring_case() {
        let machines = vec![mock_machine_model(7, "sn1")];

        assert!(is_duplicate_serial("SN1", None, &machines));
        assert!(is_duplicate_serial("Sn1", Some(5), &machines));
    }

    /// Expect the machine being updated to not conflict with itself
    #[test]
    fn ignores_excluded_machine() {
        let machines = vec![mock_machine_model(7, "SN1")];

        assert!(!is_duplicate_serial("sn1", Some(7), &machines));
    }

    /// Expect no match for a different serial number or an empty snapshot
    #[test]
    fn accepts_unused_serial() {
        let machines = vec![mock_machine_model(1, "SN1"), mock_machine_model(2, "SN2")];

        assert!(!is_duplicate_serial("SN3", None, &machines));
        assert!(!is_duplicate_serial("SN1", None, &[]));
    }

    /// Expect partial matches to not count as duplicates
    #[test]
    fn requires_exact_match() {
        let machines = vec![mock_machine_model(1, "SN1-A")];

        assert!(!is_duplicate_serial("SN1", None, &machines));
        assert!(!is_duplicate_serial(" SN1-A", None, &machines));
    }
}
