use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{CreateKegiatan, Kegiatan, UpdateKegiatan};

pub struct KegiatanService;

impl KegiatanService {
    /// Lists activities, newest first. When `projects` is given, only
    /// activities whose project name matches one of the entries are
    /// returned (exact match, OR semantics). An unmatched name simply
    /// yields an empty list.
    pub async fn list(pool: &PgPool, projects: Option<&[String]>) -> AppResult<Vec<Kegiatan>> {
        let kegiatan = match projects {
            Some(names) => {
                sqlx::query_as::<_, Kegiatan>(
                    r#"
                    SELECT id, judul_kegiatan, nama_proyek, tanggal_mulai, tanggal_berakhir,
                           waktu_mulai, waktu_berakhir, created_at, updated_at
                    FROM daftar_kegiatan
                    WHERE nama_proyek = ANY($1)
                    ORDER BY id DESC
                    "#,
                )
                .bind(names)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Kegiatan>(
                    r#"
                    SELECT id, judul_kegiatan, nama_proyek, tanggal_mulai, tanggal_berakhir,
                           waktu_mulai, waktu_berakhir, created_at, updated_at
                    FROM daftar_kegiatan
                    ORDER BY id DESC
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(kegiatan)
    }

    /// Gets an activity by ID
    pub async fn get_by_id(pool: &PgPool, id: i32) -> AppResult<Kegiatan> {
        let kegiatan = sqlx::query_as::<_, Kegiatan>(
            r#"
            SELECT id, judul_kegiatan, nama_proyek, tanggal_mulai, tanggal_berakhir,
                   waktu_mulai, waktu_berakhir, created_at, updated_at
            FROM daftar_kegiatan
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Kegiatan with id {} not found", id)))?;

        Ok(kegiatan)
    }

    /// Creates a new activity
    pub async fn create(pool: &PgPool, input: CreateKegiatan) -> AppResult<Kegiatan> {
        let judul = input.judul_kegiatan.trim();
        let proyek = input.nama_proyek.trim();
        Self::validate(
            judul,
            proyek,
            input.tanggal_mulai.and_time(input.waktu_mulai),
            input.tanggal_berakhir.and_time(input.waktu_berakhir),
        )?;

        let kegiatan = sqlx::query_as::<_, Kegiatan>(
            r#"
            INSERT INTO daftar_kegiatan
                (judul_kegiatan, nama_proyek, tanggal_mulai, tanggal_berakhir,
                 waktu_mulai, waktu_berakhir)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, judul_kegiatan, nama_proyek, tanggal_mulai, tanggal_berakhir,
                      waktu_mulai, waktu_berakhir, created_at, updated_at
            "#,
        )
        .bind(judul)
        .bind(proyek)
        .bind(input.tanggal_mulai)
        .bind(input.tanggal_berakhir)
        .bind(input.waktu_mulai)
        .bind(input.waktu_berakhir)
        .fetch_one(pool)
        .await?;

        Ok(kegiatan)
    }

    /// Replaces all fields of an existing activity
    pub async fn update(pool: &PgPool, id: i32, input: UpdateKegiatan) -> AppResult<Kegiatan> {
        let judul = input.judul_kegiatan.trim();
        let proyek = input.nama_proyek.trim();
        Self::validate(
            judul,
            proyek,
            input.tanggal_mulai.and_time(input.waktu_mulai),
            input.tanggal_berakhir.and_time(input.waktu_berakhir),
        )?;

        let kegiatan = sqlx::query_as::<_, Kegiatan>(
            r#"
            UPDATE daftar_kegiatan
            SET judul_kegiatan = $1, nama_proyek = $2, tanggal_mulai = $3,
                tanggal_berakhir = $4, waktu_mulai = $5, waktu_berakhir = $6,
                updated_at = NOW()
            WHERE id = $7
            RETURNING id, judul_kegiatan, nama_proyek, tanggal_mulai, tanggal_berakhir,
                      waktu_mulai, waktu_berakhir, created_at, updated_at
            "#,
        )
        .bind(judul)
        .bind(proyek)
        .bind(input.tanggal_mulai)
        .bind(input.tanggal_berakhir)
        .bind(input.waktu_mulai)
        .bind(input.waktu_berakhir)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Kegiatan with id {} not found", id)))?;

        Ok(kegiatan)
    }

    /// Deletes an activity (hard delete)
    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM daftar_kegiatan WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Kegiatan with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Shared create/update validation. Malformed activities are rejected
    /// here so the calculator can assume start < end.
    fn validate(
        judul: &str,
        proyek: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<()> {
        if judul.is_empty() {
            return Err(AppError::Validation(
                "judul_kegiatan cannot be empty".to_string(),
            ));
        }
        if judul.len() > 255 {
            return Err(AppError::Validation(
                "judul_kegiatan cannot exceed 255 characters".to_string(),
            ));
        }
        if proyek.is_empty() {
            return Err(AppError::Validation(
                "nama_proyek cannot be empty".to_string(),
            ));
        }
        if proyek.len() > 255 {
            return Err(AppError::Validation(
                "nama_proyek cannot exceed 255 characters".to_string(),
            ));
        }
        if start >= end {
            return Err(AppError::Validation(
                "activity must start before it ends".to_string(),
            ));
        }

        Ok(())
    }
}
