use serde::Deserialize;

///
/// Document of `counters` collection, `seq` is the last id handed out
///
#[derive(Deserialize)]
pub struct CounterFindEntity {
    pub seq: i64,
}
