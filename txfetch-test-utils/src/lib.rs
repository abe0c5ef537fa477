pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::eth::{factory, MockTransaction},
        test_setup_with_eth_tables, test_setup_with_tables, test_setup_with_user_tables,
        TestError, TestSetup,
    };
}
