use actix_web::{test, App};
use backend::routes;

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(App::new().configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    let health: serde_json::Value = serde_json::from_slice(&body).expect("health response is JSON");
    assert_eq!(health["status"], "ok");
    assert_eq!(health["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(health["time"].as_str().is_some());
}
