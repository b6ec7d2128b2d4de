pub mod guest;
pub mod invite;
pub mod rsvp;
