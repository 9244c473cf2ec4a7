use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Hourly-rate configuration. The table holds at most one row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pengaturan {
    pub id: i32,
    pub nama_karyawan: String,
    pub rate: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// DTO for replacing the rate configuration
#[derive(Debug, Deserialize)]
pub struct ReplacePengaturan {
    pub nama_karyawan: String,
    pub rate: f64,
}
