pub mod calculator;
pub mod currency;

pub use calculator::{
    build_detail, build_report, overtime_hours, KegiatanDetail, KegiatanReport,
    KegiatanWithHours, WorkDuration, OVERTIME_PREMIUM, STANDARD_DAY_HOURS,
};
pub use currency::format_idr;
