use sea_orm_migration::{prelude::*, schema::*};

static IDX_ETH_TRANSACTION_BLOCK_NUMBER: &str = "idx_eth_transaction_block_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EthTransaction::Table)
                    .if_not_exists()
                    .col(string(EthTransaction::TransactionHash).primary_key())
                    .col(integer(EthTransaction::TransactionStatus))
                    .col(string(EthTransaction::BlockHash))
                    .col(big_integer(EthTransaction::BlockNumber))
                    .col(string(EthTransaction::FromAddress))
                    .col(string_null(EthTransaction::ToAddress))
                    .col(string_null(EthTransaction::ContractAddress))
                    .col(integer(EthTransaction::LogsCount))
                    .col(text(EthTransaction::Input))
                    .col(string(EthTransaction::Value))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ETH_TRANSACTION_BLOCK_NUMBER)
                    .table(EthTransaction::Table)
                    .col(EthTransaction::BlockNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ETH_TRANSACTION_BLOCK_NUMBER)
                    .table(EthTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EthTransaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EthTransaction {
    Table,
    TransactionHash,
    TransactionStatus,
    BlockHash,
    BlockNumber,
    FromAddress,
    ToAddress,
    ContractAddress,
    LogsCount,
    Input,
    Value,
}
