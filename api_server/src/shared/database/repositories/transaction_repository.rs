use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use crate::domains::transaction::models::{NewTransaction, Transaction, TransactionType};
use super::traits::TransactionRepository;

// 거래 레포지토리
// PgTransactionRepository: transactions table access.
// create_settled also touches the wallet table inside the same DB transaction.
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INSERT_TRANSACTION: &str = r#"
    INSERT INTO transactions
        (asset_id, symbol, name, transaction_type, quantity, price, total_amount, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING id, asset_id, symbol, name, transaction_type, quantity, price, total_amount, created_at
"#;

fn row_to_transaction(row: &PgRow) -> Result<Transaction> {
    let transaction_type: String = row.get("transaction_type");
    let transaction_type = transaction_type
        .parse::<TransactionType>()
        .context("Unknown transaction_type stored in database")?;

    Ok(Transaction {
        id: row.get::<i64, _>("id") as u64,
        asset_id: row.get::<i64, _>("asset_id") as u64,
        symbol: row.get("symbol"),
        name: row.get("name"),
        transaction_type,
        quantity: row.get("quantity"),
        price: row.get("price"),
        total_amount: row.get("total_amount"),
        created_at: row.get("created_at"),
    })
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn find_all(&self) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, asset_id, symbol, name, transaction_type, quantity, price, total_amount, created_at
            FROM transactions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch transactions")?;

        rows.iter().map(row_to_transaction).collect()
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, asset_id, symbol, name, transaction_type, quantity, price, total_amount, created_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch transaction by id")?;

        row.as_ref().map(row_to_transaction).transpose()
    }

    async fn find_by_asset_id(&self, asset_id: u64) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, asset_id, symbol, name, transaction_type, quantity, price, total_amount, created_at
            FROM transactions
            WHERE asset_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(asset_id as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch transactions by asset_id")?;

        rows.iter().map(row_to_transaction).collect()
    }

    async fn find_by_symbol(&self, symbol: &str) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, asset_id, symbol, name, transaction_type, quantity, price, total_amount, created_at
            FROM transactions
            WHERE symbol = $1
            ORDER BY id ASC
            "#,
        )
        .bind(symbol)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch transactions by symbol")?;

        rows.iter().map(row_to_transaction).collect()
    }

    async fn create(&self, new: &NewTransaction) -> Result<Transaction> {
        let total_amount = new.total_amount()?;
        let row = sqlx::query(INSERT_TRANSACTION)
            .bind(new.asset_id as i64)
            .bind(&new.symbol)
            .bind(&new.name)
            .bind(new.transaction_type.as_str())
            .bind(new.quantity)
            .bind(new.price)
            .bind(total_amount)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .context("Failed to create transaction")?;

        row_to_transaction(&row)
    }

    async fn create_settled(
        &self,
        new: &NewTransaction,
        wallet_delta: Decimal,
    ) -> Result<Option<Transaction>> {
        let total_amount = new.total_amount()?;
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin settlement transaction")?;

        // 1. 거래 기록 저장
        let row = sqlx::query(INSERT_TRANSACTION)
            .bind(new.asset_id as i64)
            .bind(&new.symbol)
            .bind(&new.name)
            .bind(new.transaction_type.as_str())
            .bind(new.quantity)
            .bind(new.price)
            .bind(total_amount)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .context("Failed to create transaction")?;
        let transaction = row_to_transaction(&row)?;

        // 2. 지갑 잔액 변경 (잔액이 음수가 되면 갱신되지 않음)
        let wallet = sqlx::query(
            r#"
            UPDATE wallet
            SET balance = balance + $1,
                updated_at = NOW()
            WHERE singleton AND balance + $1 >= 0
            RETURNING id
            "#,
        )
        .bind(wallet_delta)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to settle wallet balance")?;

        // 3. 지갑 갱신 실패 시 거래 기록도 롤백
        if wallet.is_none() {
            tx.rollback()
                .await
                .context("Failed to roll back settlement transaction")?;
            return Ok(None);
        }

        tx.commit()
            .await
            .context("Failed to commit settlement transaction")?;

        Ok(Some(transaction))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id as i64)
            .execute(&self.pool)
            .await
            .context("Failed to delete transaction")?;

        Ok(result.rows_affected() > 0)
    }
}
