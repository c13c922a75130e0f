
use plantwatch_test_utils::prelude::*;

use crate::model::machine::SaveMachineDto;

/// Submitted fields of a valid machine that is not due for maintenance
fn machine_dto(serial_number: &str) -> SaveMachineDto {
    SaveMachineDto::from(machine_factory::mock_machine_model(0, serial_number))
}
