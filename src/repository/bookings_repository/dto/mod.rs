mod booking;

pub use booking::*;
