use std::sync::Arc;
use crate::domain::ports::{GuestRepository, RsvpRepository};
use crate::domain::services::invite_tool::InviteToolService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub guest_repo: Arc<dyn GuestRepository>,
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    pub invite_tool: Arc<InviteToolService>,
    pub templates: Arc<Tera>,
}
