#![allow(dead_code)]

pub mod test_data;
pub mod test_utils;

pub use mock_server::MockOptions;
pub use test_data::{example_pet, EXAMPLE_PET_ID};
pub use test_utils::{setup_test_environment, setup_with, test_config};
