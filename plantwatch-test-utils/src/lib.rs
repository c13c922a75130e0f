pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{
            alert::factory as alert_factory, machine::factory as machine_factory,
            maintenance::factory as maintenance_factory,
        },
        TestBuilder, TestContext, TestError,
    };
}
