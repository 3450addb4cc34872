//! Full table lifecycle over HTTP against the in-memory administration
//! client.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use std::sync::Arc;
use tablegate_admin::MemoryTableAdmin;

const CREATE_BODY: &str = "<table><name>orders</name>\
    <columnfamily><name>info</name><max-versions>2</max-versions></columnfamily>\
    <columnfamily><name>audit</name></columnfamily></table>";

#[actix_web::test]
async fn test_table_lifecycle() {
    let admin = Arc::new(MemoryTableAdmin::new());
    let app = test_app!(admin.clone());

    // create
    let req = test::TestRequest::post()
        .uri("/api/table")
        .insert_header(("Content-Type", "text/xml"))
        .set_payload(CREATE_BODY)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::ACCEPTED);
    assert_eq!(admin.is_enabled("orders"), Some(true));

    // read back
    let req = test::TestRequest::get().uri("/api/orders").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let xml = String::from_utf8(body.to_vec()).unwrap();
    assert!(xml.contains("<name>info:</name>"));
    assert!(xml.contains("<max-versions>2</max-versions>"));
    assert!(xml.contains("<name>audit:</name>"));

    // altering an enabled table is refused downstream
    let alter = "<table><columnfamily><name>info</name><max-versions>9</max-versions>\
                 <bloomfilter>true</bloomfilter></columnfamily></table>";
    let req = test::TestRequest::put()
        .uri("/api/table/orders")
        .set_payload(alter)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body, "Table is enabled: orders");

    // disable, then alter
    let req = test::TestRequest::post().uri("/api/orders/disable").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::ACCEPTED);
    assert_eq!(admin.is_enabled("orders"), Some(false));

    let req = test::TestRequest::put()
        .uri("/api/table/orders")
        .set_payload(alter)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::ACCEPTED);

    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(("Accept", "text/plain"))
        .to_request();
    let text = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(text.contains("{NAME => 'info:', VERSIONS => '9'"));
    assert!(text.contains("BLOOMFILTER => 'true'"));

    // regions
    admin.split_region("orders", "m").unwrap();
    let req = test::TestRequest::get()
        .uri("/api/orders/regions")
        .insert_header(("Accept", "text/plain"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body, "\nm");

    // delete
    let req = test::TestRequest::delete().uri("/api/table/orders").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::ACCEPTED);
    assert_eq!(admin.table_count(), 0);

    let req = test::TestRequest::get().uri("/api/orders").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_duplicate_create_is_server_error() {
    let admin = Arc::new(MemoryTableAdmin::new());
    let app = test_app!(admin);

    for expected in [StatusCode::ACCEPTED, StatusCode::INTERNAL_SERVER_ERROR] {
        let req = test::TestRequest::post()
            .uri("/api/table")
            .set_payload(CREATE_BODY)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected);
    }
}

#[actix_web::test]
async fn test_enable_missing_table_is_404() {
    let app = test_app!(Arc::new(MemoryTableAdmin::new()));

    let req = test::TestRequest::post().uri("/api/ghost/enable").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body, "Table not found: ghost");
}
