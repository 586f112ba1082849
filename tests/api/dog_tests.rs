//! Dog API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, dog_payload, TestApp, BASE};

#[tokio::test]
async fn test_create_dog_returns_created() {
    let app = TestApp::new().await;

    let created = app
        .create_dog(&dog_payload("Rex", "German Shepherd", "K9 Kennels"))
        .await;

    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["name"], "Rex");
    assert_eq!(created["statusId"], 1);
    assert_eq!(created["statusName"], "In Training");
    assert_eq!(created["birthDate"], "2020-05-15");
    assert!(created["leavingReasonId"].is_null());
    assert!(created["leavingReasonName"].is_null());
}

#[tokio::test]
async fn test_create_dog_ignores_client_supplied_id() {
    let app = TestApp::new().await;

    let mut payload = dog_payload("Rex", "Beagle", "K9 Kennels");
    payload["id"] = json!(999);
    payload["statusName"] = json!("Something else");

    let created = app.create_dog(&payload).await;

    assert_ne!(created["id"], 999);
    assert_eq!(created["statusName"], "In Training");
}

#[tokio::test]
async fn test_create_dog_with_missing_fields_returns_field_errors() {
    let app = TestApp::new().await;

    let response = app
        .post_json(&format!("{BASE}/dogs"), r#"{"name": "Rex", "breed": "  "}"#)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], 10007);

    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["birthDate", "breed", "dateAcquired", "gender", "statusId", "supplier"]
    );
    assert_eq!(json["errors"][1]["message"], "Breed is required");
}

#[tokio::test]
async fn test_create_dog_with_malformed_json_returns_bad_request() {
    let app = TestApp::new().await;

    let response = app.post_json(&format!("{BASE}/dogs"), "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], 10002);
}

#[tokio::test]
async fn test_create_dog_with_bad_date_returns_bad_request() {
    let app = TestApp::new().await;

    let mut payload = dog_payload("Rex", "Beagle", "K9 Kennels");
    payload["birthDate"] = json!("15/05/2020");

    let response = app
        .post_json(&format!("{BASE}/dogs"), &payload.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_dog_with_unknown_status_returns_not_found() {
    let app = TestApp::new().await;

    let mut payload = dog_payload("Rex", "Beagle", "K9 Kennels");
    payload["statusId"] = json!(99);

    let response = app
        .post_json(&format!("{BASE}/dogs"), &payload.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Status not found with id: 99");

    let list = body_json(app.get(&format!("{BASE}/dogs")).await).await;
    assert_eq!(list["totalSize"], 0);
}

#[tokio::test]
async fn test_create_dog_with_unknown_leaving_reason_returns_not_found() {
    let app = TestApp::new().await;

    let mut payload = dog_payload("Rex", "Beagle", "K9 Kennels");
    payload["leavingReasonId"] = json!(77);

    let response = app
        .post_json(&format!("{BASE}/dogs"), &payload.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Leaving reason not found with id: 77");
}

#[tokio::test]
async fn test_get_dog() {
    let app = TestApp::new().await;
    let created = app
        .create_dog(&dog_payload("Rex", "Beagle", "K9 Kennels"))
        .await;
    let id = created["id"].as_i64().unwrap();

    let response = app.get(&format!("{BASE}/dogs/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_get_missing_dog_returns_not_found() {
    let app = TestApp::new().await;

    let response = app.get(&format!("{BASE}/dogs/12345")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], 10001);
    assert_eq!(json["message"], "Dog not found with id: 12345");
}

#[tokio::test]
async fn test_get_dog_with_invalid_id_returns_bad_request() {
    let app = TestApp::new().await;

    let response = app.get(&format!("{BASE}/dogs/not-a-number")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_dog_overwrites_every_field() {
    let app = TestApp::new().await;

    let mut payload = dog_payload("Rex", "Beagle", "K9 Kennels");
    payload["statusId"] = json!(4);
    payload["leavingDate"] = json!("2024-02-01");
    payload["leavingReasonId"] = json!(5);
    let created = app.create_dog(&payload).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["leavingReasonName"], "Retired (Re-homed)");

    // Optional fields left out of the replacement are cleared
    let replacement = json!({
        "name": "Rex II",
        "breed": "Labrador",
        "supplier": "Other Kennels",
        "gender": "Male",
        "birthDate": "2019-01-01",
        "dateAcquired": "2020-01-01",
        "statusId": 2
    });
    let response = app
        .put_json(&format!("{BASE}/dogs/{id}"), &replacement.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Rex II");
    assert_eq!(updated["statusName"], "In Service");
    assert!(updated["badgeId"].is_null());
    assert!(updated["leavingDate"].is_null());
    assert!(updated["leavingReasonId"].is_null());
    assert!(updated["kennellingCharacteristic"].is_null());

    let fetched = body_json(app.get(&format!("{BASE}/dogs/{id}")).await).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_dog_returns_not_found() {
    let app = TestApp::new().await;

    let payload = dog_payload("Rex", "Beagle", "K9 Kennels");
    let response = app
        .put_json(&format!("{BASE}/dogs/404"), &payload.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_dog_validates_body() {
    let app = TestApp::new().await;
    let created = app
        .create_dog(&dog_payload("Rex", "Beagle", "K9 Kennels"))
        .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .put_json(&format!("{BASE}/dogs/{id}"), r#"{"name": "Rex"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let fetched = body_json(app.get(&format!("{BASE}/dogs/{id}")).await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_dog_hides_it() {
    let app = TestApp::new().await;
    let created = app
        .create_dog(&dog_payload("Rex", "Beagle", "K9 Kennels"))
        .await;
    let id = created["id"].as_i64().unwrap();

    let response = app.delete(&format!("{BASE}/dogs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get(&format!("{BASE}/dogs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete(&format!("{BASE}/dogs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = dog_payload("Rex", "Beagle", "K9 Kennels");
    let response = app
        .put_json(&format!("{BASE}/dogs/{id}"), &payload.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_json(app.get(&format!("{BASE}/dogs")).await).await;
    assert_eq!(list["totalSize"], 0);
    assert_eq!(list["empty"], true);
}

#[tokio::test]
async fn test_list_dogs_empty() {
    let app = TestApp::new().await;

    let response = app.get(&format!("{BASE}/dogs")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "content": [],
            "pageNumber": 0,
            "size": 20,
            "offset": 0,
            "totalSize": 0,
            "totalPages": 0,
            "numberOfElements": 0,
            "empty": true
        })
    );
}

#[tokio::test]
async fn test_search_dogs_by_name_breed_and_supplier() {
    let app = TestApp::new().await;
    app.create_dog(&dog_payload("Rex", "German Shepherd", "K9 Kennels"))
        .await;
    app.create_dog(&dog_payload("Rexa", "Beagle", "K9 Kennels"))
        .await;
    app.create_dog(&dog_payload("Fido", "Beagle", "Other Supplier"))
        .await;

    let json = body_json(app.get(&format!("{BASE}/dogs?name=rex")).await).await;
    assert_eq!(json["totalSize"], 2);

    let json = body_json(app.get(&format!("{BASE}/dogs?name=rex&breed=beagle")).await).await;
    assert_eq!(json["totalSize"], 1);
    assert_eq!(json["content"][0]["name"], "Rexa");

    let json = body_json(app.get(&format!("{BASE}/dogs?supplier=other")).await).await;
    assert_eq!(json["totalSize"], 1);
    assert_eq!(json["content"][0]["name"], "Fido");

    // Blank filters are ignored
    let json = body_json(app.get(&format!("{BASE}/dogs?name=&breed=")).await).await;
    assert_eq!(json["totalSize"], 3);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let app = TestApp::new().await;
    app.create_dog(&dog_payload("Rex", "Beagle", "K9 Kennels"))
        .await;

    let json = body_json(app.get(&format!("{BASE}/dogs?name=%25")).await).await;
    assert_eq!(json["totalSize"], 0);
}

#[tokio::test]
async fn test_search_folds_case_beyond_ascii() {
    let app = TestApp::new().await;
    app.create_dog(&dog_payload("Ödin", "Schäferhund", "Ålesund Kennels"))
        .await;
    app.create_dog(&dog_payload("Rex", "Beagle", "K9 Kennels"))
        .await;

    // ödin, ÖDIN, Ödin
    for term in ["%C3%B6din", "%C3%96DIN", "%C3%96din"] {
        let json = body_json(app.get(&format!("{BASE}/dogs?name={term}")).await).await;
        assert_eq!(json["totalSize"], 1, "name={term}");
        assert_eq!(json["content"][0]["name"], "Ödin");
    }

    // SCHÄFER
    let json = body_json(app.get(&format!("{BASE}/dogs?breed=SCH%C3%84FER")).await).await;
    assert_eq!(json["totalSize"], 1);

    // åLESUND
    let json = body_json(app.get(&format!("{BASE}/dogs?supplier=%C3%A5LESUND")).await).await;
    assert_eq!(json["totalSize"], 1);
}

#[tokio::test]
async fn test_list_dogs_paginates() {
    let app = TestApp::new().await;
    for name in ["Alpha", "Bravo", "Charlie"] {
        app.create_dog(&dog_payload(name, "Beagle", "K9 Kennels"))
            .await;
    }

    let first = body_json(app.get(&format!("{BASE}/dogs?page=0&size=2")).await).await;
    assert_eq!(first["numberOfElements"], 2);
    assert_eq!(first["totalSize"], 3);
    assert_eq!(first["totalPages"], 2);
    assert_eq!(first["content"][0]["name"], "Alpha");

    let second = body_json(app.get(&format!("{BASE}/dogs?page=1&size=2")).await).await;
    assert_eq!(second["numberOfElements"], 1);
    assert_eq!(second["offset"], 2);
    assert_eq!(second["content"][0]["name"], "Charlie");

    let beyond = body_json(app.get(&format!("{BASE}/dogs?page=5&size=2")).await).await;
    assert_eq!(beyond["empty"], true);
    assert_eq!(beyond["totalSize"], 3);
}

#[tokio::test]
async fn test_list_dogs_caps_page_size() {
    let app = TestApp::new().await;

    let json = body_json(app.get(&format!("{BASE}/dogs?size=1000")).await).await;
    assert_eq!(json["size"], 100);
}

#[tokio::test]
async fn test_list_dogs_sorts() {
    let app = TestApp::new().await;
    for name in ["Bravo", "Alpha", "Charlie"] {
        app.create_dog(&dog_payload(name, "Beagle", "K9 Kennels"))
            .await;
    }

    let json = body_json(app.get(&format!("{BASE}/dogs?sort=name,desc")).await).await;
    let names: Vec<&str> = json["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);
}

#[tokio::test]
async fn test_list_dogs_rejects_bad_parameters() {
    let app = TestApp::new().await;

    for query in ["sort=weight", "sort=name,sideways", "page=-1", "size=0", "size=abc"] {
        let response = app.get(&format!("{BASE}/dogs?{query}")).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "query {query} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/api/cats").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], 10001);
}
