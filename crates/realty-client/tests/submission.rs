//! Form-backed calls validate locally before touching the network.

mod common;

use common::{client_for, property_json};
use realty_client::ApiError;
use realty_forms::{PropertyForm, WaitlistForm};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing_form(price: &str) -> PropertyForm {
    PropertyForm {
        title: "Harbor house".into(),
        description: "Family home two blocks from the marina".into(),
        location: "10 Harbor Rd".into(),
        city: "Miami".into(),
        state: "FL".into(),
        price: price.into(),
        image_url: "https://img.example.com/1.jpg".into(),
        square_feet: "1600".into(),
        bedrooms: "3".into(),
        bathrooms: "2".into(),
        property_type: "House".into(),
        listing_type: "For Sale".into(),
        ..PropertyForm::default()
    }
}

#[tokio::test]
async fn negative_price_never_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit_property(&listing_form("-5"), 12)
        .await
        .unwrap_err();
    let ApiError::Invalid(errors) = err else {
        panic!("expected local validation failure, got {err:?}");
    };
    assert_eq!(errors.get("price"), Some("Price must be positive"));
}

#[tokio::test]
async fn valid_listing_is_posted_with_owner() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/properties"))
        .and(body_partial_json(json!({
            "ownerId": 12,
            "price": 850000.0,
            "isNew": true,
            "isFeatured": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(property_json(8, "Miami")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .submit_property(&listing_form("850000"), 12)
        .await
        .unwrap();
    assert_eq!(created.id, 8);
}

#[tokio::test]
async fn listing_update_patches_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/properties/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(property_json(8, "Miami")))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .submit_property_update(8, &listing_form("900000"), 12)
        .await
        .unwrap();
}

#[tokio::test]
async fn waitlist_requires_terms_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/waitlist"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = WaitlistForm {
        full_name: "Jo Park".into(),
        email: "jo@example.com".into(),
        property_interest: "investment".into(),
        agreed_to_terms: false,
    };
    assert!(matches!(
        client.submit_waitlist(&form).await,
        Err(ApiError::Invalid(_))
    ));

    form.agreed_to_terms = true;
    client.submit_waitlist(&form).await.unwrap();
}
