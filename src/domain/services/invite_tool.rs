use std::sync::Arc;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{
    models::invite::{GeneratedGuest, InviteToolState},
    ports::InviteToolStore,
    services::{
        guest_list::{build, derive, derive_all, parse_guest_names},
        share::{share_target, ShareTarget},
        slug::slug_to_display_name,
        template::{detect_template_key, find_template, TemplateKey},
    },
};
use crate::error::AppError;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InviteToolView {
    pub raw_guest_names: String,
    pub intro_text: String,
    pub template_key: TemplateKey,
    pub guests: Vec<GeneratedGuest>,
}

/// Who an invite link's `?to=` value greets.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGuest {
    pub name: String,
    /// Set when no stored guest carries the slug and `name` was rebuilt from it.
    pub derived: bool,
    pub guest: Option<GeneratedGuest>,
}

/// Guest-list generator backed by an [`InviteToolStore`].
///
/// Every mutation is load, modify, save of the whole blob, serialized by
/// `write_lock`. Links and messages are derived on each read.
pub struct InviteToolService {
    store: Arc<dyn InviteToolStore>,
    base_url: String,
    write_lock: Mutex<()>,
}

impl InviteToolService {
    pub fn new(store: Arc<dyn InviteToolStore>, base_url: String) -> Self {
        Self {
            store,
            base_url,
            write_lock: Mutex::new(()),
        }
    }

    fn view_of(&self, state: InviteToolState) -> InviteToolView {
        InviteToolView {
            guests: derive_all(&state.guests, &self.base_url, &state.intro_text),
            template_key: detect_template_key(&state.intro_text),
            raw_guest_names: state.raw_guest_names,
            intro_text: state.intro_text,
        }
    }

    pub async fn view(&self) -> Result<InviteToolView, AppError> {
        let state = self.store.load().await?;
        Ok(self.view_of(state))
    }

    /// Replaces the stored batch with one built from `raw_guest_names`.
    pub async fn generate(&self, raw_guest_names: &str) -> Result<InviteToolView, AppError> {
        let guests = build(raw_guest_names, Utc::now().timestamp_millis())?;

        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await?;
        state.raw_guest_names = parse_guest_names(raw_guest_names).join("\n");
        state.guests = guests;
        self.store.save(&state).await?;

        info!("Generated guest list with {} guests", state.guests.len());
        Ok(self.view_of(state))
    }

    /// Keeps the operator's draft name list without touching the generated batch.
    pub async fn save_raw_names(&self, raw_guest_names: String) -> Result<InviteToolView, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await?;
        state.raw_guest_names = raw_guest_names;
        self.store.save(&state).await?;
        Ok(self.view_of(state))
    }

    pub async fn update_intro(&self, intro_text: String) -> Result<InviteToolView, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await?;
        state.intro_text = intro_text;
        self.store.save(&state).await?;
        Ok(self.view_of(state))
    }

    pub async fn apply_template(&self, key: &str) -> Result<InviteToolView, AppError> {
        let template = find_template(key)
            .ok_or_else(|| AppError::NotFound(format!("Template {key} not found")))?;

        info!("Applying {} intro template", template.label);
        self.update_intro(template.content.to_string()).await
    }

    pub async fn remove_guest(&self, id: &str) -> Result<InviteToolView, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await?;

        let before = state.guests.len();
        state.guests.retain(|g| g.id != id);
        if state.guests.len() == before {
            return Err(AppError::NotFound("Guest not found in the list".into()));
        }

        self.store.save(&state).await?;
        info!("Removed guest {} from the list", id);
        Ok(self.view_of(state))
    }

    /// Looks a guest up by the `?to=` value of an invite link, encoded or not.
    ///
    /// Links from an older batch still greet someone: an unknown slug is
    /// turned back into a title-cased name.
    pub async fn resolve(&self, slug: &str) -> Result<ResolvedGuest, AppError> {
        let decoded = urlencoding::decode(slug)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| slug.to_string());
        let decoded = decoded.trim();
        if decoded.is_empty() {
            return Err(AppError::NotFound("Guest not found".into()));
        }

        let state = self.store.load().await?;
        let resolved = match state.guests.iter().find(|g| g.slug == decoded) {
            Some(guest) => ResolvedGuest {
                name: guest.name.clone(),
                derived: false,
                guest: Some(derive(guest, &self.base_url, &state.intro_text)),
            },
            None => ResolvedGuest {
                name: slug_to_display_name(decoded),
                derived: true,
                guest: None,
            },
        };
        Ok(resolved)
    }

    pub async fn share(&self, id: &str) -> Result<ShareTarget, AppError> {
        let state = self.store.load().await?;
        let guest = state
            .guests
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::NotFound("Guest not found in the list".into()))?;

        let generated = derive(guest, &self.base_url, &state.intro_text);
        Ok(share_target(generated.personalized_text))
    }

    pub async fn reset(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.store.clear().await?;
        info!("Invite tool state cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::template::{FORMAL_TEMPLATE, RELIGIOUS_TEMPLATE};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct MemoryStore {
        state: StdMutex<Option<InviteToolState>>,
    }

    #[async_trait]
    impl InviteToolStore for MemoryStore {
        async fn load(&self) -> Result<InviteToolState, AppError> {
            Ok(self.state.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, state: &InviteToolState) -> Result<(), AppError> {
            *self.state.lock().unwrap() = Some(state.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), AppError> {
            *self.state.lock().unwrap() = None;
            Ok(())
        }
    }

    fn service(base: &str) -> InviteToolService {
        InviteToolService::new(Arc::new(MemoryStore::default()), base.to_string())
    }

    #[tokio::test]
    async fn test_generate_replaces_batch_and_normalizes_input() {
        let svc = service("https://w.id");

        let first = svc.generate("Budi, Siti\nAndi").await.unwrap();
        assert_eq!(first.raw_guest_names, "Budi\nSiti\nAndi");
        assert_eq!(first.template_key, TemplateKey::Formal);
        assert_eq!(first.guests.len(), 3);
        assert_eq!(first.guests[1].invite_link, "https://w.id/?to=siti");

        let second = svc.generate("Rina").await.unwrap();
        assert_eq!(second.guests.len(), 1);
        assert_eq!(svc.view().await.unwrap().guests[0].guest.name, "Rina");
    }

    #[tokio::test]
    async fn test_generate_empty_keeps_previous_state() {
        let svc = service("");
        svc.generate("Budi").await.unwrap();

        assert!(matches!(svc.generate(" , \n").await, Err(AppError::Validation(_))));
        assert_eq!(svc.view().await.unwrap().guests.len(), 1);
    }

    #[tokio::test]
    async fn test_draft_names_saved_verbatim() {
        let svc = service("https://w.id");
        svc.generate("Ana").await.unwrap();

        let view = svc.save_raw_names("Ana,\nBudi, ".into()).await.unwrap();
        assert_eq!(view.raw_guest_names, "Ana,\nBudi, ");
        assert_eq!(view.guests.len(), 1);
        assert_eq!(svc.view().await.unwrap().raw_guest_names, "Ana,\nBudi, ");
    }

    #[tokio::test]
    async fn test_intro_changes_rederive_texts() {
        let svc = service("https://w.id");
        svc.generate("Ana").await.unwrap();

        let custom = svc.update_intro("Hi [nama]!".into()).await.unwrap();
        assert_eq!(custom.template_key, TemplateKey::Custom);
        assert_eq!(custom.guests[0].personalized_text, "Hi Ana!\n\nInvitation link: https://w.id/?to=ana");

        let religious = svc.apply_template("religious").await.unwrap();
        assert_eq!(religious.intro_text, RELIGIOUS_TEMPLATE);
        assert!(religious.guests[0].personalized_text.contains("invite Ana to attend"));

        assert!(matches!(svc.apply_template("casual").await, Err(AppError::NotFound(_))));
        assert_eq!(svc.view().await.unwrap().intro_text, RELIGIOUS_TEMPLATE);
    }

    #[tokio::test]
    async fn test_remove_resolve_and_share() {
        let svc = service("https://w.id");
        let view = svc.generate("Ana\nAna\nBudi").await.unwrap();
        let second_ana = view.guests[1].clone();

        let resolved = svc.resolve("ana-2").await.unwrap();
        assert!(!resolved.derived);
        assert_eq!(resolved.name, "Ana");
        assert_eq!(resolved.guest.map(|g| g.guest.id), Some(second_ana.guest.id.clone()));

        let fallback = svc.resolve("budi-santoso").await.unwrap();
        assert!(fallback.derived);
        assert_eq!(fallback.name, "Budi Santoso");
        assert!(fallback.guest.is_none());

        assert_eq!(svc.resolve("siti%20aminah").await.unwrap().name, "Siti aminah");
        assert!(matches!(svc.resolve("  ").await, Err(AppError::NotFound(_))));

        let share = svc.share(&second_ana.guest.id).await.unwrap();
        assert_eq!(share.text, second_ana.personalized_text);
        assert!(share.whatsapp_url.starts_with("https://wa.me/?text="));

        let after = svc.remove_guest(&second_ana.guest.id).await.unwrap();
        assert_eq!(after.guests.len(), 2);
        assert!(matches!(svc.remove_guest(&second_ana.guest.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let svc = service("");
        svc.update_intro("custom".into()).await.unwrap();
        svc.generate("Ana").await.unwrap();

        svc.reset().await.unwrap();
        let view = svc.view().await.unwrap();
        assert!(view.guests.is_empty());
        assert_eq!(view.intro_text, FORMAL_TEMPLATE);
    }
}
