//! Spreadsheet export: report → cell grid → XLSX workbook.

pub mod xlsx;

pub use xlsx::write_workbook;

use crate::report::KegiatanReport;

/// Column headers for the export sheet
pub const EXPORT_HEADERS: [&str; 10] = [
    "ID",
    "Judul Kegiatan",
    "Nama Proyek",
    "Tanggal Mulai",
    "Tanggal Berakhir",
    "Waktu Mulai",
    "Waktu Berakhir",
    "Total Hours",
    "Created At",
    "Updated At",
];

/// Flattens a report into a two-dimensional cell grid: header row, one row
/// per activity, then the totals block as label/value pairs immediately
/// below the last data row.
pub fn report_to_grid(report: &KegiatanReport) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(report.data.len() + 5);

    grid.push(EXPORT_HEADERS.iter().map(|h| h.to_string()).collect());

    for row in &report.data {
        grid.push(vec![
            row.id.to_string(),
            row.judul_kegiatan.clone(),
            row.nama_proyek.clone(),
            row.tanggal_mulai.to_string(),
            row.tanggal_berakhir.to_string(),
            row.waktu_mulai.to_string(),
            row.waktu_berakhir.to_string(),
            row.total_hours.clone(),
            row.created_at.to_rfc3339(),
            row.updated_at.to_rfc3339(),
        ]);
    }

    grid.push(vec!["Total Work".to_string(), report.total_work.clone()]);
    grid.push(vec!["Total Overtime".to_string(), report.overtime.clone()]);
    grid.push(vec!["Total Income".to_string(), report.income.clone()]);
    grid.push(vec![
        "Total Overtime Income".to_string(),
        report.overtime_income.clone(),
    ]);

    grid
}
