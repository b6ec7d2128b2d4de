use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::models::invite::{GeneratedGuest, StoredGuest};
use crate::domain::services::slug::{ensure_unique_slug, slugify};
use crate::domain::services::template::render;
use crate::error::AppError;

pub const EMPTY_GUEST_LIST_MESSAGE: &str = "Enter at least one guest name first.";

/// Splits on newlines and commas; runs of separators count once, blanks are dropped.
pub fn parse_guest_names(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds a fresh batch from raw operator input.
///
/// Slugs are unique within the batch, and `created_at` is `batch_start_ms + index`
/// so guests created together keep their input order.
pub fn build(raw: &str, batch_start_ms: i64) -> Result<Vec<StoredGuest>, AppError> {
    let names = parse_guest_names(raw);
    if names.is_empty() {
        return Err(AppError::Validation(EMPTY_GUEST_LIST_MESSAGE.into()));
    }

    let mut used = HashSet::with_capacity(names.len());
    let guests = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let base = match slugify(&name) {
                s if s.is_empty() => format!("guest-{}", index + 1),
                s => s,
            };
            let slug = ensure_unique_slug(&base, &used);
            used.insert(slug.clone());

            StoredGuest {
                id: Uuid::new_v4().to_string(),
                name,
                slug,
                created_at: batch_start_ms + index as i64,
            }
        })
        .collect();

    Ok(guests)
}

/// `<base>/?to=<slug>`, or empty when no base URL is known yet.
pub fn invite_link(base_url: &str, slug: &str) -> String {
    if base_url.is_empty() {
        return String::new();
    }
    format!("{}/?to={}", base_url, urlencoding::encode(slug))
}

pub fn derive(guest: &StoredGuest, base_url: &str, template: &str) -> GeneratedGuest {
    let link = invite_link(base_url, &guest.slug);
    GeneratedGuest {
        personalized_text: render(template, &guest.name, &link),
        invite_link: link,
        guest: guest.clone(),
    }
}

pub fn derive_all(guests: &[StoredGuest], base_url: &str, template: &str) -> Vec<GeneratedGuest> {
    guests.iter().map(|g| derive(g, base_url, template)).collect()
}
