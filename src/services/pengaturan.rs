use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Pengaturan, ReplacePengaturan};

pub struct PengaturanService;

impl PengaturanService {
    /// The configuration row, if one has been set
    pub async fn get(pool: &PgPool) -> AppResult<Option<Pengaturan>> {
        let pengaturan = sqlx::query_as::<_, Pengaturan>(
            r#"
            SELECT id, nama_karyawan, rate, created_at, updated_at
            FROM pengaturan
            LIMIT 1
            "#,
        )
        .fetch_optional(pool)
        .await?;

        Ok(pengaturan)
    }

    /// The configuration row, or `MissingRateConfig` when none is set.
    /// Every computation path that needs the rate goes through this.
    pub async fn get_required(pool: &PgPool) -> AppResult<Pengaturan> {
        Self::get(pool).await?.ok_or(AppError::MissingRateConfig)
    }

    /// Atomically replaces the configuration.
    ///
    /// The table is pinned to a single row (id = 1), so replacement is an
    /// upsert on that key inside a transaction: a failed write leaves the
    /// previous configuration intact and the table is never observably
    /// empty mid-replacement.
    pub async fn replace(pool: &PgPool, input: ReplacePengaturan) -> AppResult<Pengaturan> {
        let nama = input.nama_karyawan.trim();
        if nama.is_empty() {
            return Err(AppError::Validation(
                "nama_karyawan cannot be empty".to_string(),
            ));
        }
        if nama.len() > 255 {
            return Err(AppError::Validation(
                "nama_karyawan cannot exceed 255 characters".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;

        let pengaturan = sqlx::query_as::<_, Pengaturan>(
            r#"
            INSERT INTO pengaturan (id, nama_karyawan, rate)
            VALUES (1, $1, $2)
            ON CONFLICT (id) DO UPDATE
            SET nama_karyawan = EXCLUDED.nama_karyawan,
                rate = EXCLUDED.rate,
                updated_at = NOW()
            RETURNING id, nama_karyawan, rate, created_at, updated_at
            "#,
        )
        .bind(nama)
        .bind(input.rate)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(pengaturan)
    }
}
