//! Work-hour, overtime and income computation.
//!
//! Everything here is a stateless transform over already-fetched rows: the
//! services hand in activities and the configured rate, and get back the
//! listing/detail/export payloads with all derived figures attached.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::models::{Kegiatan, Pengaturan};
use crate::report::currency::format_idr;

/// Hours in a standard working day. Activities must exceed this (strictly)
/// before any overtime accrues.
pub const STANDARD_DAY_HOURS: f64 = 8.0;

/// Overtime is paid out at 30% of the hourly rate. This is the entire
/// overtime payment, not a bonus on top of base pay.
pub const OVERTIME_PREMIUM: f64 = 0.30;

/// 09:00, start of the reference working window.
fn window_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00:00 is a valid time")
}

/// 17:00, end of the reference working window.
fn window_end_time() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("17:00:00 is a valid time")
}

fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Elapsed time of a single activity.
///
/// One value, two representations: the one-decimal label used by listings
/// and the export sheet, and the hour / zero-padded-minute pair used by the
/// detail endpoint. Keeping both here stops the two read paths from
/// computing the same quantity differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDuration {
    seconds: i64,
}

impl WorkDuration {
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            seconds: (end - start).num_seconds(),
        }
    }

    /// Exact fractional hours. Used for the overtime threshold and for
    /// overtime accumulation; never rounded.
    pub fn raw_hours(&self) -> f64 {
        self.seconds as f64 / 3600.0
    }

    /// Hours rounded to one decimal place. This is what listings display,
    /// and what the total worked-hours figure accumulates: the aggregate is
    /// a sum of individually rounded durations, not a rounded sum.
    pub fn rounded_hours(&self) -> f64 {
        (self.raw_hours() * 10.0).round() / 10.0
    }

    /// One-decimal display label, e.g. "11.8".
    pub fn decimal_label(&self) -> String {
        format!("{:.1}", self.rounded_hours())
    }

    /// Whole-hours part of the H:MM representation.
    pub fn whole_hours(&self) -> i64 {
        self.seconds / 3600
    }

    /// Minutes past the whole hour, zero-padded, e.g. "05".
    pub fn minute_label(&self) -> String {
        format!("{:02}", (self.seconds % 3600) / 60)
    }
}

/// Listing/export row: the activity plus its computed duration label
#[derive(Debug, Clone, Serialize)]
pub struct KegiatanWithHours {
    pub id: i32,
    pub judul_kegiatan: String,
    pub nama_proyek: String,
    pub tanggal_mulai: NaiveDate,
    pub tanggal_berakhir: NaiveDate,
    pub waktu_mulai: NaiveTime,
    pub waktu_berakhir: NaiveTime,
    pub total_hours: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl KegiatanWithHours {
    fn new(kegiatan: &Kegiatan, duration: WorkDuration) -> Self {
        Self {
            id: kegiatan.id,
            judul_kegiatan: kegiatan.judul_kegiatan.clone(),
            nama_proyek: kegiatan.nama_proyek.clone(),
            tanggal_mulai: kegiatan.tanggal_mulai,
            tanggal_berakhir: kegiatan.tanggal_berakhir,
            waktu_mulai: kegiatan.waktu_mulai,
            waktu_berakhir: kegiatan.waktu_berakhir,
            total_hours: duration.decimal_label(),
            created_at: kegiatan.created_at,
            updated_at: kegiatan.updated_at,
        }
    }
}

/// Detail row: the activity plus its duration as hour / zero-padded minute
#[derive(Debug, Clone, Serialize)]
pub struct KegiatanDetail {
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
    pub hour: i64,
    pub minute: String,
}

/// Aggregated report over a set of activities and the configured rate
#[derive(Debug, Clone, Serialize)]
pub struct KegiatanReport {
    pub data: Vec<KegiatanWithHours>,
    #[serde(rename = "totalWork")]
    pub total_work: String,
    pub overtime: String,
    pub income: String,
    #[serde(rename = "overtimeIncome")]
    pub overtime_income: String,
}

/// Overtime hours contributed by a single activity.
///
/// The reference window runs 09:00 on the activity's own start date through
/// 17:00 on its own end date, so a multi-day activity gets a window spanning
/// both days. Time before the window and time after it count independently.
/// An activity of exactly [`STANDARD_DAY_HOURS`] never accrues overtime,
/// regardless of where it sits relative to the window.
pub fn overtime_hours(kegiatan: &Kegiatan) -> f64 {
    let start = kegiatan.start_instant();
    let end = kegiatan.end_instant();

    if hours_between(start, end) <= STANDARD_DAY_HOURS {
        return 0.0;
    }

    let window_start = kegiatan.tanggal_mulai.and_time(window_start_time());
    let window_end = kegiatan.tanggal_berakhir.and_time(window_end_time());

    let mut hours = 0.0;
    if start < window_start {
        hours += hours_between(start, window_start);
    }
    if end > window_end {
        hours += hours_between(window_end, end);
    }
    hours
}

/// Builds the full report for a set of activities.
///
/// Total worked hours sum each activity's one-decimal rounded duration;
/// overtime hours accumulate at full precision. Income figures come
/// pre-formatted as Rupiah strings, which is part of the response contract.
pub fn build_report(activities: &[Kegiatan], pengaturan: &Pengaturan) -> KegiatanReport {
    let mut total_work = 0.0;
    let mut total_overtime = 0.0;

    let data = activities
        .iter()
        .map(|kegiatan| {
            let duration =
                WorkDuration::between(kegiatan.start_instant(), kegiatan.end_instant());
            total_work += duration.rounded_hours();
            total_overtime += overtime_hours(kegiatan);
            KegiatanWithHours::new(kegiatan, duration)
        })
        .collect();

    let income = total_work * pengaturan.rate;
    let overtime_income = total_overtime * pengaturan.rate * OVERTIME_PREMIUM;

    KegiatanReport {
        data,
        total_work: format!("{:.1} Jam", total_work),
        overtime: format!("{:.1} Jam", total_overtime),
        income: format_idr(income),
        overtime_income: format_idr(overtime_income),
    }
}

/// Builds the detail view for a single activity.
pub fn build_detail(kegiatan: &Kegiatan) -> KegiatanDetail {
    let duration = WorkDuration::between(kegiatan.start_instant(), kegiatan.end_instant());

    KegiatanDetail {
        id: kegiatan.id,
        judul_kegiatan: kegiatan.judul_kegiatan.clone(),
        nama_proyek: kegiatan.nama_proyek.clone(),
        tanggal_mulai: kegiatan.tanggal_mulai,
        tanggal_berakhir: kegiatan.tanggal_berakhir,
        waktu_mulai: kegiatan.waktu_mulai,
        waktu_berakhir: kegiatan.waktu_berakhir,
        created_at: kegiatan.created_at,
        updated_at: kegiatan.updated_at,
        hour: duration.whole_hours(),
        minute: duration.minute_label(),
    }
}
