use crate::repository::{rooms_repository::entity::RoomFindEntity, Booking};

#[derive(Debug, Clone)]
pub struct Room {
    pub id: i64,
    pub capacity: i32,

    /// every booking currently pointing at the room
    pub bookings: Vec<Booking>,
}

impl Room {
    pub fn is_full(&self) -> bool {
        self.bookings.len() as i64 >= i64::from(self.capacity)
    }
}

impl From<RoomFindEntity> for Room {
    fn from(value: RoomFindEntity) -> Self {
        Self {
            id: value._id,
            capacity: value.capacity,
            bookings: value.bookings.into_iter().map(Booking::from).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn room(capacity: i32, bookings_count: usize) -> Room {
        let bookings = (0..bookings_count)
            .map(|idx| Booking {
                id: idx as i64 + 1,
                user_id: Uuid::new_v4(),
                room_id: 1,
                created_at: OffsetDateTime::now_utc(),
                updated_at: OffsetDateTime::now_utc(),
            })
            .collect();

        Room {
            id: 1,
            capacity,
            bookings,
        }
    }

    #[test]
    fn is_full_empty_room() {
        assert!(!room(1, 0).is_full());
    }

    #[test]
    fn is_full_one_place_left() {
        assert!(!room(3, 2).is_full());
    }

    #[test]
    fn is_full_capacity_reached() {
        assert!(room(2, 2).is_full());
    }

    #[test]
    fn is_full_overbooked() {
        assert!(room(2, 3).is_full());
    }

    #[test]
    fn is_full_zero_capacity() {
        assert!(room(0, 0).is_full());
    }
}
