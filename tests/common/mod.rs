#![allow(dead_code)]

use bson::{doc, DateTime, Document};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use mongodb::{Client, Database};
use serde_json::json;
use std::{str::FromStr, sync::Once};
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("EVENT_BOOKING_BIND_ADDRESS").unwrap()
}

pub fn booking_url() -> String {
    format!("http://{}/booking", address())
}

pub fn create_jwt(user_id: Uuid) -> String {
    let jwt_algorithms = std::env::var("EVENT_BOOKING_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("EVENT_BOOKING_JWT_TEST_ENCODE_KEY").unwrap();

    let jwt_algorithm = jwt_algorithms
        .split(',')
        .map(|algorithm| Algorithm::from_str(algorithm.trim()).unwrap())
        .next()
        .expect("algorithms list cannot be empty");
    let jwt_key_bytes = jwt_key.as_bytes();
    let jwt_key = match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            EncodingKey::from_secret(jwt_key_bytes)
        }
        Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(jwt_key_bytes).unwrap(),
        Algorithm::EdDSA => EncodingKey::from_ed_pem(jwt_key_bytes).unwrap(),
        _ => EncodingKey::from_rsa_pem(jwt_key_bytes).unwrap(),
    };

    let claims = json!({
        "sub": user_id,
        "exp": 253402210800_i64,
    });

    jsonwebtoken::encode(&Header::new(jwt_algorithm), &claims, &jwt_key).unwrap()
}

pub async fn database() -> Database {
    let connection_string = std::env::var("EVENT_BOOKING_DB_CONNECTION_STRING").unwrap();
    let db_name = std::env::var("EVENT_BOOKING_DB_NAME").unwrap();

    let client = Client::with_uri_str(connection_string).await.unwrap();

    client.database(&db_name)
}

///
/// Ids of seeded documents are random so tests can run in parallel
/// against the database the server uses
///
pub fn random_id() -> i64 {
    let (high, _) = Uuid::new_v4().as_u64_pair();

    (high >> 2) as i64 + 1
}

pub async fn create_enrollment(db: &Database, user_id: Uuid) -> i64 {
    let id = random_id();
    let now = DateTime::now();

    db.collection::<Document>("enrollments")
        .insert_one(doc! {
            "_id": id,
            "user_id": bson::Uuid::from(user_id),
            "name": "John Doe",
            "cpf": "12345678909",
            "birthday": now,
            "phone": "(21) 98999-9999",
            "address": null,
            "created_at": now,
            "updated_at": now,
        })
        .await
        .unwrap();

    id
}

pub async fn create_ticket(
    db: &Database,
    enrollment_id: i64,
    status: &str,
    is_remote: bool,
) -> i64 {
    let ticket_type_id = random_id();
    let ticket_id = random_id();
    let now = DateTime::now();

    db.collection::<Document>("ticket_types")
        .insert_one(doc! {
            "_id": ticket_type_id,
            "name": "ticket type",
            "price": 250,
            "is_remote": is_remote,
            "includes_hotel": !is_remote,
            "created_at": now,
            "updated_at": now,
        })
        .await
        .unwrap();

    db.collection::<Document>("tickets")
        .insert_one(doc! {
            "_id": ticket_id,
            "enrollment_id": enrollment_id,
            "ticket_type_id": ticket_type_id,
            "status": status,
            "created_at": now,
            "updated_at": now,
        })
        .await
        .unwrap();

    ticket_id
}

pub async fn create_room(db: &Database, capacity: i32) -> i64 {
    let id = random_id();
    let now = DateTime::now();

    db.collection::<Document>("rooms")
        .insert_one(doc! {
            "_id": id,
            "name": format!("room {id}"),
            "capacity": capacity,
            "hotel_id": random_id(),
            "created_at": now,
            "updated_at": now,
        })
        .await
        .unwrap();

    id
}

pub async fn create_booking(db: &Database, user_id: Uuid, room_id: i64) -> i64 {
    let id = random_id();
    let now = DateTime::now();

    db.collection::<Document>("bookings")
        .insert_one(doc! {
            "_id": id,
            "user_id": bson::Uuid::from(user_id),
            "room_id": room_id,
            "created_at": now,
            "updated_at": now,
        })
        .await
        .unwrap();

    id
}

///
/// User with an enrollment and a paid, non remote ticket
///
pub async fn create_user_allowed_to_book(db: &Database) -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let enrollment_id = create_enrollment(db, user_id).await;
    create_ticket(db, enrollment_id, "PAID", false).await;

    (user_id, create_jwt(user_id))
}
