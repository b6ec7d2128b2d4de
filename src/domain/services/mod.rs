pub mod guest_list;
pub mod invite_tool;
pub mod metrics;
pub mod share;
pub mod slug;
pub mod template;
