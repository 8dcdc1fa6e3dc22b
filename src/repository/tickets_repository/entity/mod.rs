mod ticket_find_entity;

pub use ticket_find_entity::*;
