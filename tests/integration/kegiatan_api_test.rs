//! Integration tests for the activity API
//!
//! Tests CRUD, project filtering and report computation against a real
//! PostgreSQL database.

use actix_web::{test, web, App};
use kerjalog::routes;
use serde_json::Value;

use crate::common::fixtures::{kegiatan_body, pengaturan_body};
use crate::common::TestDb;

macro_rules! init_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db.pool.clone()))
                .configure(routes::kegiatan::configure)
                .configure(routes::pengaturan::configure),
        )
        .await
    };
}

// =============================================================================
// Create Tests
// =============================================================================

#[actix_web::test]
async fn test_create_returns_created_record() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Menyusun laporan",
        "Proyek Alpha",
        "2024-03-01",
        "09:00:00",
        "2024-03-01",
        "17:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert!(created["id"].as_i64().unwrap() >= 1);
    assert_eq!(created["judul_kegiatan"], "Menyusun laporan");
    assert_eq!(created["nama_proyek"], "Proyek Alpha");
    assert_eq!(created["waktu_mulai"], "09:00:00");
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());
}

#[actix_web::test]
async fn test_create_rejects_end_before_start() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Mundur",
        "Proyek Alpha",
        "2024-03-02",
        "09:00:00",
        "2024-03-01",
        "17:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"]["type"], "ValidationError");
}

#[actix_web::test]
async fn test_create_rejects_zero_length_activity() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Sekejap",
        "Proyek Alpha",
        "2024-03-01",
        "09:00:00",
        "2024-03-01",
        "09:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_create_rejects_empty_title() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "   ",
        "Proyek Alpha",
        "2024-03-01",
        "09:00:00",
        "2024-03-01",
        "17:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_create_rejects_unparsable_time() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Rusak",
        "Proyek Alpha",
        "2024-03-01",
        "not-a-time",
        "2024-03-01",
        "17:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// =============================================================================
// List / Report Tests
// =============================================================================

#[actix_web::test]
async fn test_list_without_rate_config_returns_conflict() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let req = test::TestRequest::get().uri("/daftar-kegiatan").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"]["type"], "MissingRateConfig");
}

#[actix_web::test]
async fn test_list_returns_report_with_totals() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/pengaturan")
        .set_json(pengaturan_body("Andi", 100_000.0))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    for body in [
        kegiatan_body(
            "Hari standar",
            "Proyek Alpha",
            "2024-03-01",
            "09:00:00",
            "2024-03-01",
            "17:00:00",
        ),
        kegiatan_body(
            "Hari panjang",
            "Proyek Alpha",
            "2024-03-02",
            "08:00:00",
            "2024-03-02",
            "18:00:00",
        ),
    ] {
        let req = test::TestRequest::post()
            .uri("/daftar-kegiatan")
            .set_json(&body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    let req = test::TestRequest::get().uri("/daftar-kegiatan").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let report: Value = test::read_body_json(resp).await;
    let data = report["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);

    // Newest first
    assert!(data[0]["id"].as_i64().unwrap() > data[1]["id"].as_i64().unwrap());
    assert_eq!(data[0]["total_hours"], "10.0");
    assert_eq!(data[1]["total_hours"], "8.0");

    assert_eq!(report["totalWork"], "18.0 Jam");
    assert_eq!(report["overtime"], "2.0 Jam");
    assert_eq!(report["income"], "Rp 1.800.000");
    assert_eq!(report["overtimeIncome"], "Rp 60.000");
}

#[actix_web::test]
async fn test_list_filters_by_comma_separated_projects() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let req = test::TestRequest::post()
        .uri("/pengaturan")
        .set_json(pengaturan_body("Andi", 100_000.0))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    for proyek in ["Alpha", "Beta", "Gamma"] {
        let body = kegiatan_body(
            "Kegiatan",
            proyek,
            "2024-03-01",
            "09:00:00",
            "2024-03-01",
            "17:00:00",
        );
        let req = test::TestRequest::post()
            .uri("/daftar-kegiatan")
            .set_json(&body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    // Union of the named projects
    let req = test::TestRequest::get()
        .uri("/daftar-kegiatan?nama_proyek=Alpha,Beta")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let report: Value = test::read_body_json(resp).await;
    assert_eq!(report["data"].as_array().unwrap().len(), 2);

    // An unmatched name yields an empty result set, not an error
    let req = test::TestRequest::get()
        .uri("/daftar-kegiatan?nama_proyek=Delta")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let report: Value = test::read_body_json(resp).await;
    assert!(report["data"].as_array().unwrap().is_empty());
    assert_eq!(report["totalWork"], "0.0 Jam");
    assert_eq!(report["income"], "Rp 0");
}

// =============================================================================
// Detail Tests
// =============================================================================

#[actix_web::test]
async fn test_get_returns_hour_and_minute() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Menyusun laporan",
        "Proyek Alpha",
        "2024-03-01",
        "09:00:00",
        "2024-03-01",
        "17:45:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/daftar-kegiatan/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["hour"], 8);
    assert_eq!(detail["minute"], "45");
    assert_eq!(detail["judul_kegiatan"], "Menyusun laporan");
}

#[actix_web::test]
async fn test_get_missing_returns_not_found() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let req = test::TestRequest::get()
        .uri("/daftar-kegiatan/9999")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"]["type"], "NotFound");
}

// =============================================================================
// Update / Delete Tests
// =============================================================================

#[actix_web::test]
async fn test_update_replaces_all_fields() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Judul lama",
        "Proyek Alpha",
        "2024-03-01",
        "09:00:00",
        "2024-03-01",
        "17:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let update = kegiatan_body(
        "Judul baru",
        "Proyek Beta",
        "2024-03-05",
        "10:00:00",
        "2024-03-05",
        "15:30:00",
    );
    let req = test::TestRequest::put()
        .uri(&format!("/daftar-kegiatan/{}", id))
        .set_json(&update)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["judul_kegiatan"], "Judul baru");
    assert_eq!(updated["nama_proyek"], "Proyek Beta");
    assert_eq!(updated["tanggal_mulai"], "2024-03-05");
    assert_eq!(updated["waktu_berakhir"], "15:30:00");
}

#[actix_web::test]
async fn test_update_missing_returns_not_found() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let update = kegiatan_body(
        "Judul baru",
        "Proyek Beta",
        "2024-03-05",
        "10:00:00",
        "2024-03-05",
        "15:30:00",
    );
    let req = test::TestRequest::put()
        .uri("/daftar-kegiatan/9999")
        .set_json(&update)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_update_validates_times() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Judul lama",
        "Proyek Alpha",
        "2024-03-01",
        "09:00:00",
        "2024-03-01",
        "17:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let update = kegiatan_body(
        "Judul baru",
        "Proyek Alpha",
        "2024-03-05",
        "15:00:00",
        "2024-03-05",
        "10:00:00",
    );
    let req = test::TestRequest::put()
        .uri(&format!("/daftar-kegiatan/{}", id))
        .set_json(&update)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_delete_removes_record() {
    let db = TestDb::new().await;
    let app = init_app!(db);

    let body = kegiatan_body(
        "Sementara",
        "Proyek Alpha",
        "2024-03-01",
        "09:00:00",
        "2024-03-01",
        "17:00:00",
    );
    let req = test::TestRequest::post()
        .uri("/daftar-kegiatan")
        .set_json(&body)
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/daftar-kegiatan/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/daftar-kegiatan/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    // Deleting again reports not found
    let req = test::TestRequest::delete()
        .uri(&format!("/daftar-kegiatan/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
