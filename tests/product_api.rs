//! Product CRUD operations against a wiremock FUGA API.

use fugapi::{
    Create, Delete, FugaClient, Get, List, Product, ProductCreateParams, ProductListQuery,
    ProductUpdateParams, Update,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a `/login` mock and return a logged-in client.
async fn logged_in_client(server: &MockServer) -> FugaClient {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "connect.sid=test-session; Path=/")
                .set_body_json(serde_json::json!({ "user": { "id": 1 } })),
        )
        .mount(server)
        .await;

    let client = FugaClient::new(&server.uri(), "someone", "secret").unwrap();
    client.login().await.unwrap();
    client
}

#[tokio::test]
async fn test_get_product() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    let product_json = serde_json::json!({
        "id": 1002645007453u64,
        "name": "Test Album",
        "state": "PENDING",
        "upc": "0700000000017",
        "label": { "id": 100, "name": "Test Label" }
    });

    Mock::given(method("GET"))
        .and(path("/products/1002645007453"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&product_json))
        .mount(&mock_server)
        .await;

    let product = Product::get(&client, 1002645007453).await.unwrap();

    assert_eq!(product.id, 1002645007453);
    assert_eq!(product.name, "Test Album");
    assert_eq!(product.upc.as_deref(), Some("0700000000017"));
    assert_eq!(product.label.as_ref().unwrap().id, 100);
    assert!(!product.is_published());
}

#[tokio::test]
async fn test_list_products_sends_pagination_params() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "product": [
                { "id": 21, "name": "Album 21" },
                { "id": 22, "name": "Album 22" }
            ],
            "total": 25
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page = Product::list_page(&client, &Default::default(), 2, 10)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, Some(25));
    assert_eq!(page.page, 2);
    // Page 2 of 25 items at 10 per page is not the last page
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_list_products_with_name_filter() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("name", "winter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "product": [{ "id": 5, "name": "Winter EP" }],
            "total": 1
        })))
        .mount(&mock_server)
        .await;

    let query = ProductListQuery {
        name: Some("winter".to_string()),
    };
    let page = Product::list_page(&client, &query, 0, 20).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Winter EP");
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_create_product_sends_only_set_fields() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(serde_json::json!({
            "name": "New Album",
            "label": 100
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 10001,
            "name": "New Album",
            "state": "PENDING",
            "label": { "id": 100, "name": "Test Label" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = ProductCreateParams {
        name: "New Album".to_string(),
        label: Some(100),
        ..Default::default()
    };
    let product = Product::create(&client, params).await.unwrap();

    assert_eq!(product.id, 10001);
    assert_eq!(product.state.as_deref(), Some("PENDING"));
}

#[tokio::test]
async fn test_update_product() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/products/10001"))
        .and(body_json(serde_json::json!({ "name": "Renamed Album" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 10001,
            "name": "Renamed Album"
        })))
        .mount(&mock_server)
        .await;

    let params = ProductUpdateParams {
        name: Some("Renamed Album".to_string()),
        ..Default::default()
    };
    let product = Product::update(&client, 10001, params).await.unwrap();

    assert_eq!(product.name, "Renamed Album");
}

#[tokio::test]
async fn test_delete_product_accepts_plain_text_response() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    // FUGA delete endpoints answer with plain text
    Mock::given(method("DELETE"))
        .and(path("/products/10001"))
        .respond_with(ResponseTemplate::new(200).set_body_string("product deleted"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Product::delete(&client, 10001).await.unwrap();
}

#[tokio::test]
async fn test_get_missing_product_is_not_found() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/products/404404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": { "code": "NOT_FOUND", "message": "product 404404 not found" }
        })))
        .mount(&mock_server)
        .await;

    let err = Product::get(&client, 404404).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_list_all_stops_after_short_page() {
    let mock_server = MockServer::start().await;
    let client = logged_in_client(&mock_server).await;

    // A page shorter than the default page size ends the walk
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "product": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }],
            "total": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let all = Product::list_all(&client, &ProductListQuery::default())
        .await
        .unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[1].name, "B");
}
