//! HTTP-level tests: stream registry CRUD, template metadata endpoints, and
//! the end-to-end render flow.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend::config::AppConfig;
use backend::db;
use backend::docgen::extract::collect_document_text;
use backend::docgen::fill::FillStrategy;
use backend::storage::Storage;
use chrono::Utc;
use common::model::document::GeneratedDocument;
use common::model::stream::Stream;
use common::model::template::DocumentTemplate;
use docx_rs::{read_docx, Docx, Paragraph, Run};
use serde_json::json;
use std::collections::BTreeMap;
use std::io::Cursor;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> AppConfig {
    let cfg = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_path: dir.path().join("test.sqlite"),
        data_dir: dir.path().join("data"),
        fill_strategy: FillStrategy::NaiveReplace,
    };
    let conn = db::open(&cfg.db_path).unwrap();
    db::init_schema(&conn).unwrap();
    cfg
}

macro_rules! app {
    ($cfg:expr) => {{
        let cfg = $cfg.clone();
        test::init_service(
            App::new().configure(move |app| backend::configure_app(app, web::Data::new(cfg))),
        )
        .await
    }};
}

fn seed_template(cfg: &AppConfig, id: &str, fields: &[(&str, &str)]) -> DocumentTemplate {
    let conn = db::open(&cfg.db_path).unwrap();
    let now = Utc::now();
    let template = DocumentTemplate {
        id: id.to_string(),
        name: "Shipment Form".to_string(),
        file_name: format!("{}.docx", id),
        file_md5: None,
        fields: fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        key_field: None,
        created_at: now,
        updated_at: now,
    };
    db::queries::templates::insert(&conn, &template).unwrap();
    template
}

#[actix_web::test]
async fn streams_crud_roundtrip() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    let app = app!(cfg);

    // Create two streams.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/streams")
            .set_json(json!({"name": "North Gate", "url": "https://cams.example/north.m3u8"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Stream = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/streams")
            .set_json(json!({
                "name": "South Gate",
                "url": "https://cams.example/south.m3u8",
                "description": "Container yard exit"
            }))
            .to_request(),
    )
    .await;
    let second: Stream = test::read_body_json(resp).await;
    assert!(second.is_active);

    // List is newest first.
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/streams").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Vec<Stream> = test::read_body_json(resp).await;
    assert_eq!(
        listed.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    // Full update.
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/streams/{}", first.id))
            .set_json(json!({
                "name": "North Gate (maintenance)",
                "url": "https://cams.example/north.m3u8",
                "is_active": false
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Stream = test::read_body_json(resp).await;
    assert!(!updated.is_active);

    // Delete, then the record is gone.
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/streams/{}", first.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/streams/{}", first.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn stream_create_rejects_blank_names() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    let app = app!(cfg);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/streams")
            .set_json(json!({"name": "  ", "url": "https://cams.example/x.m3u8"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn viewer_shows_active_streams_only() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    {
        let conn = db::open(&cfg.db_path).unwrap();
        db::queries::streams::insert(
            &conn,
            &serde_json::from_value(json!({
                "name": "East Gate",
                "url": "https://cams.example/east.m3u8"
            }))
            .unwrap(),
        )
        .unwrap();
        let inactive = db::queries::streams::insert(
            &conn,
            &serde_json::from_value(json!({
                "name": "Dead Gate",
                "url": "https://cams.example/dead.m3u8",
                "is_active": false
            }))
            .unwrap(),
        )
        .unwrap();

        let app = app!(cfg);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/viewer").to_request())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("East Gate"));
        assert!(!body.contains("Dead Gate"));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/viewer/gate/{}", inactive.id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn key_field_must_belong_to_the_schema() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    seed_template(&cfg, "tpl-1", &[("ALPHA", "Alpha"), ("BETA", "Beta")]);
    let app = app!(cfg);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/templates/tpl-1/key_field")
            .set_json(json!({"key_field": "NOPE"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/templates/tpl-1/key_field")
            .set_json(json!({"key_field": "BETA"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let template: DocumentTemplate = test::read_body_json(resp).await;
    assert_eq!(template.key_field.as_deref(), Some("BETA"));

    // And it can be cleared again.
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/templates/tpl-1/key_field")
            .set_json(json!({"key_field": null}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let template: DocumentTemplate = test::read_body_json(resp).await;
    assert_eq!(template.key_field, None);
}

#[actix_web::test]
async fn template_deletion_cascades_to_documents() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    let template = seed_template(&cfg, "tpl-1", &[("ALPHA", "Alpha")]);
    {
        let conn = db::open(&cfg.db_path).unwrap();
        db::queries::documents::insert(
            &conn,
            &GeneratedDocument {
                id: "doc-1".to_string(),
                template_id: template.id.clone(),
                created_by: None,
                created_at: Utc::now(),
                field_values: Default::default(),
                key_field_value: None,
            },
        )
        .unwrap();
    }
    let app = app!(cfg);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/templates/tpl-1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let conn = db::open(&cfg.db_path).unwrap();
    assert!(db::queries::documents::get(&conn, "doc-1").unwrap().is_none());
}

#[actix_web::test]
async fn refresh_create_and_render_flow() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);

    // Store a real template file, then drive everything over HTTP.
    let template = seed_template(&cfg, "tpl-1", &[]);
    let storage = Storage::new(&cfg.data_dir);
    storage.ensure_layout().unwrap();
    let docx = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text("B/L [B_L_NO] consigned to [CONSIGNEE]")),
    );
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    storage
        .save_template_file(&template.file_name, &cursor.into_inner())
        .unwrap();

    let app = app!(cfg);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/templates/tpl-1/refresh")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let refreshed: DocumentTemplate = test::read_body_json(resp).await;
    assert_eq!(refreshed.key_field.as_deref(), Some("B_L_NO"));
    assert_eq!(
        refreshed.fields.get("CONSIGNEE").map(String::as_str),
        Some("Consignee")
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/documents")
            .set_json(json!({
                "template_id": "tpl-1",
                "created_by": "dispatch",
                "field_values": {"B_L_NO": "BL-7781", "CONSIGNEE": "Acme Freight"}
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let document: GeneratedDocument = test::read_body_json(resp).await;
    assert_eq!(document.key_field_value.as_deref(), Some("BL-7781"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/documents/{}/render", document.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("wordprocessingml"));

    let body = test::read_body(resp).await;
    let text = collect_document_text(&read_docx(&body).unwrap());
    assert!(text.contains("B/L BL-7781 consigned to Acme Freight"));
}

#[actix_web::test]
async fn rendering_a_missing_document_is_404() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    let app = app!(cfg);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/documents/ghost/render")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
