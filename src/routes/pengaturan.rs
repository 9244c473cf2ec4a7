use actix_web::{web, HttpResponse};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::ReplacePengaturan;
use crate::services::PengaturanService;

/// GET /pengaturan - The rate configuration, or null when unset
pub async fn get_pengaturan(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let pengaturan = PengaturanService::get(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(pengaturan))
}

/// POST /pengaturan - Atomically replace the rate configuration
pub async fn replace_pengaturan(
    pool: web::Data<DbPool>,
    body: web::Json<ReplacePengaturan>,
) -> AppResult<HttpResponse> {
    let pengaturan = PengaturanService::replace(pool.get_ref(), body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(pengaturan))
}

/// Configure rate configuration routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pengaturan")
            .route("", web::get().to(get_pengaturan))
            .route("", web::post().to(replace_pengaturan)),
    );
}
