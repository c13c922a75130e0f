pub mod prelude;

pub mod alert;
pub mod machine;
pub mod maintenance_record;
pub mod sea_orm_active_enums;
