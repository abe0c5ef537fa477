//! User account and viewed transaction fixture utilities.

use crate::TestSetup;

pub mod data;

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
