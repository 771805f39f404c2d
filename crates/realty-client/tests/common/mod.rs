//! Shared fixtures for the wiremock-backed client tests.

#![allow(dead_code)]

use realty_client::ApiClient;
use realty_config::{ApiConfig, UploadConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> ApiClient {
    client_with_limits(server, UploadConfig::default())
}

pub fn client_with_limits(server: &MockServer, upload: UploadConfig) -> ApiClient {
    let api = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    ApiClient::new(&api, &upload).expect("client should build")
}

/// A client pointed at a local port nothing listens on.
pub fn unreachable_client() -> ApiClient {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let api = ApiConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        ..ApiConfig::default()
    };
    ApiClient::new(&api, &UploadConfig::default()).expect("client should build")
}

pub fn user_json(id: i64) -> Value {
    json!({
        "id": id,
        "username": "landlord1",
        "fullName": "Lee Land",
        "email": "lee@example.com",
        "userType": "Landlord & Sell",
        "bio": "Owner of several downtown units"
    })
}

pub fn property_json(id: i64, city: &str) -> Value {
    json!({
        "id": id,
        "ownerId": 12,
        "title": format!("Listing {id}"),
        "description": "A bright listing with plenty of natural light",
        "price": 850_000,
        "location": "10 Harbor Rd",
        "city": city,
        "state": "FL",
        "bedrooms": 3,
        "bathrooms": 2,
        "squareFeet": 1600,
        "propertyType": "House",
        "listingType": "For Sale",
        "imageUrl": format!("https://img.example.com/{id}.jpg"),
        "isFeatured": true,
        "isNew": false
    })
}
