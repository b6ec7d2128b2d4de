use serde::Serialize;
use tera::{Context, Tera};

use crate::config::Config;
use crate::error::AppError;

pub const SHARE_MESSAGE_TEMPLATE: &str = "share_message.txt";

const WHATSAPP_BASE: &str = "https://wa.me/?text=";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareTarget {
    pub text: String,
    pub whatsapp_url: String,
}

/// Deep link that opens the messaging app with `text` prefilled.
pub fn whatsapp_url(text: &str) -> String {
    format!("{}{}", WHATSAPP_BASE, urlencoding::encode(text))
}

pub fn share_target(text: String) -> ShareTarget {
    ShareTarget {
        whatsapp_url: whatsapp_url(&text),
        text,
    }
}

/// The general, non-personalized announcement. `None` until a base URL is configured.
pub fn general_share_message(tera: &Tera, config: &Config) -> Result<Option<String>, AppError> {
    if config.share_base_url.is_empty() {
        return Ok(None);
    }

    let mut context = Context::new();
    context.insert("couple_names", &config.couple_names);
    context.insert("event_date", &config.event_date);
    context.insert("event_location", &config.event_location);
    context.insert("site_url", &format!("{}/", config.share_base_url));

    let text = tera
        .render(SHARE_MESSAGE_TEMPLATE, &context)
        .map_err(|e| AppError::InternalWithMsg(format!("share message render failed: {e}")))?;

    Ok(Some(text.trim().to_string()))
}
