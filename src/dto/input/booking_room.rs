use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::Deserialize;

///
/// Body of POST and PUT booking requests
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoom {
    /// missing and `null` are kept as `None` so they end in 404 like `0` does
    pub room_id: Option<i64>,
}

impl BookingRoom {
    ///
    /// Requested room id, `0` when it was not given
    ///
    pub fn room_id(&self) -> i64 {
        self.room_id.unwrap_or_default()
    }
}

///
/// Request without a body is the same as `{}`,
/// anything else has to be valid JSON
///
#[async_trait]
impl<S> FromRequest<S> for BookingRoom
where
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let Json(booking_room) = Json::<Self>::from_bytes(&body)?;

        Ok(booking_room)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, StatusCode},
        response::IntoResponse,
    };

    fn request(body: &'static str) -> Request {
        Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn booking_room_json_deserialize_ok() {
        let booking_room = serde_json::from_str::<BookingRoom>(r#"{ "roomId": 7 }"#).unwrap();

        assert_eq!(booking_room.room_id(), 7);
    }

    #[test]
    fn booking_room_json_deserialize_missing() {
        let booking_room = serde_json::from_str::<BookingRoom>("{}").unwrap();

        assert_eq!(booking_room.room_id(), 0);
    }

    #[test]
    fn booking_room_json_deserialize_null() {
        let booking_room = serde_json::from_str::<BookingRoom>(r#"{ "roomId": null }"#).unwrap();

        assert_eq!(booking_room.room_id(), 0);
    }

    #[test]
    fn booking_room_json_deserialize_not_number() {
        let booking_room = serde_json::from_str::<BookingRoom>(r#"{ "roomId": "7" }"#);

        assert!(booking_room.is_err());
    }

    #[tokio::test]
    async fn booking_room_extract_empty_body() {
        let request = Request::builder().body(Body::empty()).unwrap();

        let booking_room = BookingRoom::from_request(request, &()).await.unwrap();

        assert_eq!(booking_room.room_id(), 0);
    }

    #[tokio::test]
    async fn booking_room_extract_whitespace_body() {
        let booking_room = BookingRoom::from_request(request(" \n"), &())
            .await
            .unwrap();

        assert_eq!(booking_room.room_id(), 0);
    }

    #[tokio::test]
    async fn booking_room_extract_json() {
        let booking_room = BookingRoom::from_request(request(r#"{ "roomId": 5 }"#), &())
            .await
            .unwrap();

        assert_eq!(booking_room.room_id(), 5);
    }

    #[tokio::test]
    async fn booking_room_extract_malformed_json() {
        let rejection = BookingRoom::from_request(request("{ roomId: "), &())
            .await
            .unwrap_err();

        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
