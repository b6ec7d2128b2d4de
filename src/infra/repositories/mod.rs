pub mod sqlite_guest_repo;
pub mod sqlite_rsvp_repo;

pub mod postgres_guest_repo;
pub mod postgres_rsvp_repo;
