use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::asset::models::Asset;
use super::traits::AssetRepository;

// 자산 레포지토리
// PgAssetRepository: assets table access
pub struct PgAssetRepository {
    pool: PgPool,
}

impl PgAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_asset(row: &PgRow) -> Asset {
    Asset {
        id: row.get::<i64, _>("id") as u64,
        symbol: row.get("symbol"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl AssetRepository for PgAssetRepository {
    async fn find_all(&self) -> Result<Vec<Asset>> {
        let rows = sqlx::query(
            r#"
            SELECT id, symbol, name, created_at
            FROM assets
            ORDER BY symbol ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch assets")?;

        Ok(rows.iter().map(row_to_asset).collect())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Asset>> {
        let row = sqlx::query(
            r#"
            SELECT id, symbol, name, created_at
            FROM assets
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch asset by id")?;

        Ok(row.as_ref().map(row_to_asset))
    }

    async fn create_or_get(&self, symbol: &str, name: &str) -> Result<Asset> {
        let row = sqlx::query(
            r#"
            INSERT INTO assets (symbol, name, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (symbol)
            DO UPDATE SET symbol = EXCLUDED.symbol
            RETURNING id, symbol, name, created_at
            "#,
        )
        .bind(symbol)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create or get asset")?;

        Ok(row_to_asset(&row))
    }
}
