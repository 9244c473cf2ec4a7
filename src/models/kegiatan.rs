use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Work activity model for reading from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Kegiatan {
    pub id: i32,
    pub judul_kegiatan: String,
    pub nama_proyek: String,
    pub tanggal_mulai: NaiveDate,
    pub tanggal_berakhir: NaiveDate,
    pub waktu_mulai: NaiveTime,
    pub waktu_berakhir: NaiveTime,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new activity
#[derive(Debug, Deserialize)]
pub struct CreateKegiatan {
    pub judul_kegiatan: String,
    pub nama_proyek: String,
    pub tanggal_mulai: NaiveDate,
    pub tanggal_berakhir: NaiveDate,
    pub waktu_mulai: NaiveTime,
    pub waktu_berakhir: NaiveTime,
}

/// DTO for a full-record update of an activity
#[derive(Debug, Deserialize)]
pub struct UpdateKegiatan {
    pub judul_kegiatan: String,
    pub nama_proyek: String,
    pub tanggal_mulai: NaiveDate,
    pub tanggal_berakhir: NaiveDate,
    pub waktu_mulai: NaiveTime,
    pub waktu_berakhir: NaiveTime,
}

impl Kegiatan {
    /// The activity's start as a naive local instant (date + time-of-day).
    pub fn start_instant(&self) -> NaiveDateTime {
        self.tanggal_mulai.and_time(self.waktu_mulai)
    }

    /// The activity's end as a naive local instant (date + time-of-day).
    pub fn end_instant(&self) -> NaiveDateTime {
        self.tanggal_berakhir.and_time(self.waktu_berakhir)
    }
}
