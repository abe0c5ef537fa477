use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_eth_transaction::EthTransaction, m20251017_000002_app_user::AppUser,
};

static PK_APP_USER_TRANSACTION: &str = "pk_app_user_transaction";
static FK_APP_USER_TRANSACTION_USER_ID: &str = "fk_app_user_transaction_user_id";
static FK_APP_USER_TRANSACTION_TRANSACTION_HASH: &str = "fk_app_user_transaction_transaction_hash";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUserTransaction::Table)
                    .if_not_exists()
                    .col(integer(AppUserTransaction::UserId))
                    .col(string(AppUserTransaction::TransactionHash))
                    .col(timestamp(AppUserTransaction::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_APP_USER_TRANSACTION)
                            .col(AppUserTransaction::UserId)
                            .col(AppUserTransaction::TransactionHash),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_USER_TRANSACTION_USER_ID)
                    .from_tbl(AppUserTransaction::Table)
                    .from_col(AppUserTransaction::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_USER_TRANSACTION_TRANSACTION_HASH)
                    .from_tbl(AppUserTransaction::Table)
                    .from_col(AppUserTransaction::TransactionHash)
                    .to_tbl(EthTransaction::Table)
                    .to_col(EthTransaction::TransactionHash)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_USER_TRANSACTION_TRANSACTION_HASH)
                    .table(AppUserTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_USER_TRANSACTION_USER_ID)
                    .table(AppUserTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppUserTransaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUserTransaction {
    Table,
    UserId,
    TransactionHash,
    CreatedAt,
}
