mod booking_validator;
mod booking_validator_impl;

pub use booking_validator::*;
pub use booking_validator_impl::*;
