mod dto;
mod entity;
mod enrollments_repository;
mod enrollments_repository_impl;

pub use dto::Enrollment;
pub use enrollments_repository::*;
pub use enrollments_repository_impl::*;
