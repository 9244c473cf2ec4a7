use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::export;
use crate::report;
use crate::routes::kegiatan::ProjectFilterQuery;
use crate::services::{KegiatanService, PengaturanService};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /daftar-kegiatan-export/export - Download the report as XLSX
pub async fn export_kegiatan(
    pool: web::Data<DbPool>,
    query: web::Query<ProjectFilterQuery>,
) -> AppResult<HttpResponse> {
    let names = query.names();
    let kegiatan = KegiatanService::list(pool.get_ref(), names.as_deref()).await?;
    let pengaturan = PengaturanService::get_required(pool.get_ref()).await?;

    let report = report::build_report(&kegiatan, &pengaturan);
    let grid = export::report_to_grid(&report);
    let buffer = export::write_workbook(&grid)?;

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"activities.xlsx\"",
        ))
        .body(buffer))
}

/// Configure export routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/daftar-kegiatan-export").route("/export", web::get().to(export_kegiatan)),
    );
}
