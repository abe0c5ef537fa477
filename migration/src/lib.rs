pub use sea_orm_migration::prelude::*;

mod m20251017_000001_eth_transaction;
mod m20251017_000002_app_user;
mod m20251017_000003_app_user_transaction;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_eth_transaction::Migration),
            Box::new(m20251017_000002_app_user::Migration),
            Box::new(m20251017_000003_app_user_transaction::Migration),
        ]
    }
}
