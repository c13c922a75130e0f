use chrono::NaiveDate;

use crate::{
    model::machine::SaveMachineDto,
    server::{
        error::validation::ValidationError,
        model::db::MachineModel,
        validation::{into_result, is_duplicate_serial, limit_length, require_non_blank},
    },
};

/// Validates a machine before it is added or updated.
///
/// Rules are evaluated in order and every failure is collected:
/// 1. `name`, `serial_number`, `model` and `manufacturer` are not blank
/// 2. `installation_date` is not later than `today`
/// 3. when both maintenance dates are set, the next one is not earlier than the last one
/// 4. no other machine uses the same serial number (case-insensitive)
/// 5. text fields fit their column limits: 50 characters for `serial_number` and `model`,
///    100 for `name`, `manufacturer`, `location` and `department`, 200 for `description`
///    and 500 for `notes` and `image_path`
///
/// Rule 4 needs a snapshot of the stored machines. When the snapshot could not be loaded
/// the caller passes `None` and the rule is skipped. The case-insensitive unique index on
/// `serial_number` still rejects duplicates at write time.
///
/// # Arguments
/// - `machine_id` - ID of the machine being updated, `None` when adding a new machine
/// - `machine` - Submitted machine fields
/// - `existing` - Snapshot of all stored machines, `None` when it could not be loaded
/// - `today` - Current local date
///
/// # Returns
/// - `Ok(())` - The machine satisfies every rule that could be checked
/// - `Err(Vec<ValidationError>)` - Every rule the machine failed, in rule order
pub fn validate_machine(
    machine_id: Option<i32>,
    machine: &SaveMachineDto,
    existing: Option<&[MachineModel]>,
    today: NaiveDate,
) -> Result<(), Vec<ValidationError>> {
    let mut reasons = Vec::new();

    require_non_blank(&machine.name, "Name", &mut reasons);
    require_non_blank(&machine.serial_number, "Serial number", &mut reasons);
    require_non_blank(&machine.model, "Model", &mut reasons);
    require_non_blank(&machine.manufacturer, "Manufacturer", &mut reasons);

    if machine.installation_date > today {
        reasons.push(ValidationError::InstallationDateInFuture {
            installation_date: machine.installation_date,
            today,
        });
    }

    if let (Some(last), Some(next)) = (
        machine.last_maintenance_date,
        machine.next_maintenance_date,
    ) {
        if next < last {
            reasons.push(ValidationError::NextMaintenanceBeforeLast { last, next });
        }
    }

    if let Some(existing) = existing {
        if is_duplicate_serial(&machine.serial_number, machine_id, existing) {
            reasons.push(ValidationError::DuplicateSerialNumber(
                machine.serial_number.clone(),
            ));
        }
    }

    limit_length(Some(machine.name.as_str()), "Name", 100, &mut reasons);
    limit_length(machine.description.as_deref(), "Description", 200, &mut reasons);
    limit_length(Some(machine.serial_number.as_str()), "Serial number", 50, &mut reasons);
    limit_length(Some(machine.model.as_str()), "Model", 50, &mut reasons);
    limit_length(Some(machine.manufacturer.as_str()), "Manufacturer", 100, &mut reasons);
    limit_length(machine.location.as_deref(), "Location", 100, &mut reasons);
    limit_length(machine.department.as_deref(), "Department", 100, &mut reasons);
    limit_length(machine.notes.as_deref(), "Notes", 500, &mut reasons);
    limit_length(machine.image_path.as_deref(), "Image path", 500, &mut reasons);

    into_result(reasons)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use plantwatch_test_utils::fixtures::machine::factory::mock_machine_model;

    use super::validate_machine;
    use crate::{model::machine::SaveMachineDto, server::error::validation::ValidationError};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    fn candidate() -> SaveMachineDto {
        let mut machine = SaveMachineDto::from(mock_machine_model(0, "SN1"));
        machine.installation_date = date(2022, 6, 1);
        machine.last_maintenance_date = Some(date(2024, 5, 15));
        machine.next_maintenance_date = Some(date(2024, 6, 15));
        machine
    }

    /// Expect a complete machine with a free serial number to be accepted
    #[test]
    fn accepts_valid_machine() {
        let existing = vec![mock_machine_model(1, "SN2")];

        let result = validate_machine(None, &candidate(), Some(existing.as_slice()), today());

        assert_eq!(result, Ok(()));
    }

    /// Expect a blank name to be rejected for that field only
    #[test]
    fn rejects_blank_name() {
        let mut machine = candidate();
        machine.name = String::new();
        machine.installation_date = today();

        let result = validate_machine(None, &machine, Some(&[][..]), today());

        assert_eq!(result, Err(vec![ValidationError::BlankField("Name")]));
    }

    /// Expect whitespace-only required fields to count as blank and all be reported
    #[test]
    fn accumulates_blank_fields() {
        let mut machine = candidate();
        machine.serial_number = "   ".to_string();
        machine.model = String::new();
        machine.manufacturer = "\t".to_string();

        let result = validate_machine(None, &machine, Some(&[][..]), today());

        assert_eq!(
            result,
            Err(vec![
                ValidationError::BlankField("Serial number"),
                ValidationError::BlankField("Model"),
                ValidationError::BlankField("Manufacturer"),
            ])
        );
    }

    /// Expect an installation date after today to be rejected, and today itself accepted
    #[test]
    fn rejects_future_installation_date() {
        let mut machine = candidate();
        machine.installation_date = date(2024, 6, 2);

        let result = validate_machine(None, &machine, Some(&[][..]), today());
        assert_eq!(
            result,
            Err(vec![ValidationError::InstallationDateInFuture {
                installation_date: date(2024, 6, 2),
                today: today(),
            }])
        );

        machine.installation_date = today();
        assert!(validate_machine(None, &machine, Some(&[][..]), today()).is_ok());
    }

    /// Expect next maintenance before last maintenance to be rejected
    #[test]
    fn rejects_next_maintenance_before_last() {
        let mut machine = candidate();
        machine.last_maintenance_date = Some(date(2024, 5, 15));
        machine.next_maintenance_date = Some(date(2024, 5, 14));

        let result = validate_machine(None, &machine, Some(&[][..]), today());

        assert_eq!(
            result,
            Err(vec![ValidationError::NextMaintenanceBeforeLast {
                last: date(2024, 5, 15),
                next: date(2024, 5, 14),
            }])
        );
    }

    /// Expect equal maintenance dates to pass the ordering rule
    #[test]
    fn accepts_equal_maintenance_dates() {
        let mut machine = candidate();
        machine.last_maintenance_date = Some(date(2024, 5, 15));
        machine.next_maintenance_date = Some(date(2024, 5, 15));

        assert!(validate_machine(None, &machine, Some(&[][..]), today()).is_ok());
    }

    /// Expect the ordering rule to be skipped when either maintenance date is unset
    #[test]
    fn skips_ordering_rule_when_date_unset() {
        let mut machine = candidate();
        machine.last_maintenance_date = None;
        machine.next_maintenance_date = Some(date(2000, 1, 1));
        assert!(validate_machine(None, &machine, Some(&[][..]), today()).is_ok());

        machine.last_maintenance_date = Some(date(2024, 5, 15));
        machine.next_maintenance_date = None;
        assert!(validate_machine(None, &machine, Some(&[][..]), today()).is_ok());
    }

    /// Expect a serial number used by another machine to be rejected regardless of case
    #[test]
    fn rejects_duplicate_serial_of_other_machine() {
        let mut machine = candidate();
        machine.serial_number = "SN1".to_string();
        let existing = vec![mock_machine_model(7, "sn1")];

        let result = validate_machine(Some(5), &machine, Some(existing.as_slice()), today());

        assert_eq!(
            result,
            Err(vec![ValidationError::DuplicateSerialNumber(
                "SN1".to_string()
            )])
        );
    }

    /// Expect a machine keeping its own serial number on update to be accepted
    #[test]
    fn accepts_own_serial_on_update() {
        let existing = vec![mock_machine_model(5, "SN1")];

        let result = validate_machine(Some(5), &candidate(), Some(existing.as_slice()), today());

        assert_eq!(result, Ok(()));
    }

    /// Expect the uniqueness rule to be skipped when no snapshot is available
    #[test]
    fn skips_uniqueness_without_snapshot() {
        let result = validate_machine(None, &candidate(), None, today());

        assert_eq!(result, Ok(()));
    }

    /// Expect the remaining rules to still apply when no snapshot is available
    #[test]
    fn applies_other_rules_without_snapshot() {
        let mut machine = candidate();
        machine.name = String::new();

        let result = validate_machine(None, &machine, None, today());

        assert_eq!(result, Err(vec![ValidationError::BlankField("Name")]));
    }

    /// Expect repeated validation of the same candidate to give the same result
    #[test]
    fn validation_is_repeatable() {
        let machine = candidate();
        let existing = vec![mock_machine_model(1, "SN2")];

        let first = validate_machine(None, &machine, Some(existing.as_slice()), today());
        let second = validate_machine(None, &machine, Some(existing.as_slice()), today());

        assert_eq!(first, second);
        assert!(first.is_ok());
    }

    /// Expect a serial number one character past its limit to be rejected, the limit itself accepted
    #[test]
    fn limits_serial_number_length() {
        let mut machine = candidate();
        machine.serial_number = "S".repeat(50);
        assert!(validate_machine(None, &machine, Some(&[][..]), today()).is_ok());

        machine.serial_number = "S".repeat(51);
        let result = validate_machine(None, &machine, Some(&[][..]), today());

        assert_eq!(
            result,
            Err(vec![ValidationError::TooLong {
                field: "Serial number",
                max: 50,
            }])
        );
    }

    /// Expect optional text to be measured in characters, not bytes
    #[test]
    fn counts_characters_for_optional_fields() {
        let mut machine = candidate();
        machine.notes = Some("é".repeat(500));
        assert!(validate_machine(None, &machine, Some(&[][..]), today()).is_ok());

        machine.notes = Some("é".repeat(501));
        let result = validate_machine(None, &machine, Some(&[][..]), today());

        assert_eq!(
            result,
            Err(vec![ValidationError::TooLong {
                field: "Notes",
                max: 500,
            }])
        );
    }
}
