use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{CreateKegiatan, UpdateKegiatan};
use crate::report;
use crate::services::{KegiatanService, PengaturanService};

/// Optional project-name filter shared by the listing and export endpoints
#[derive(Debug, Deserialize)]
pub struct ProjectFilterQuery {
    pub nama_proyek: Option<String>,
}

impl ProjectFilterQuery {
    /// Comma-separated project names; matches are unioned. None when the
    /// parameter is absent.
    pub fn names(&self) -> Option<Vec<String>> {
        self.nama_proyek
            .as_ref()
            .map(|raw| raw.split(',').map(str::to_string).collect())
    }
}

/// GET /daftar-kegiatan - List activities with the computed report
pub async fn list_kegiatan(
    pool: web::Data<DbPool>,
    query: web::Query<ProjectFilterQuery>,
) -> AppResult<HttpResponse> {
    let names = query.names();
    let kegiatan = KegiatanService::list(pool.get_ref(), names.as_deref()).await?;
    let pengaturan = PengaturanService::get_required(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(report::build_report(&kegiatan, &pengaturan)))
}

/// GET /daftar-kegiatan/{id} - Get an activity with its duration
pub async fn get_kegiatan(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let kegiatan = KegiatanService::get_by_id(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(report::build_detail(&kegiatan)))
}

/// POST /daftar-kegiatan - Create a new activity
pub async fn create_kegiatan(
    pool: web::Data<DbPool>,
    body: web::Json<CreateKegiatan>,
) -> AppResult<HttpResponse> {
    let kegiatan = KegiatanService::create(pool.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Created().json(kegiatan))
}

/// PUT /daftar-kegiatan/{id} - Replace all fields of an activity
pub async fn update_kegiatan(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateKegiatan>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let kegiatan = KegiatanService::update(pool.get_ref(), id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(kegiatan))
}

/// DELETE /daftar-kegiatan/{id} - Delete an activity
pub async fn delete_kegiatan(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    KegiatanService::delete(pool.get_ref(), id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure activity routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/daftar-kegiatan")
            .route("", web::get().to(list_kegiatan))
            .route("", web::post().to(create_kegiatan))
            .route("/{id}", web::get().to(get_kegiatan))
            .route("/{id}", web::put().to(update_kegiatan))
            .route("/{id}", web::delete().to(delete_kegiatan)),
    );
}
