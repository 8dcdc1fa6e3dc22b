use serde::Deserialize;

///
/// Personal data and address stay in the document, booking needs only the key
///
#[derive(Deserialize)]
pub struct EnrollmentFindEntity {
    pub _id: i64,
}
