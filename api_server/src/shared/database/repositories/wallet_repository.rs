use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use crate::domains::wallet::models::Wallet;
use super::traits::WalletRepository;

// 지갑 레포지토리
// PgWalletRepository: wallet table access.
// The table holds at most one row (UNIQUE singleton column).
pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn row_to_wallet(row: &PgRow) -> Wallet {
    Wallet {
        id: row.get::<i64, _>("id") as u64,
        balance: row.get("balance"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl WalletRepository for PgWalletRepository {
    async fn get_or_create(&self) -> Result<Wallet> {
        // ON CONFLICT: 동시에 호출되어도 지갑은 하나만 생성됨
        // Concurrent first calls still end up with a single row
        let row = sqlx::query(
            r#"
            INSERT INTO wallet (singleton, balance)
            VALUES (TRUE, 0)
            ON CONFLICT (singleton)
            DO UPDATE SET singleton = EXCLUDED.singleton
            RETURNING id, balance, created_at, updated_at
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context("Failed to get or create wallet")?;

        Ok(row_to_wallet(&row))
    }

    async fn adjust_balance(&self, wallet_id: u64, delta: Decimal) -> Result<Option<Wallet>> {
        let row = sqlx::query(
            r#"
            UPDATE wallet
            SET balance = balance + $1,
                updated_at = NOW()
            WHERE id = $2 AND balance + $1 >= 0
            RETURNING id, balance, created_at, updated_at
            "#,
        )
        .bind(delta)
        .bind(wallet_id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update wallet balance")?;

        Ok(row.as_ref().map(row_to_wallet))
    }
}
