use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const NAME_PLACEHOLDER: &str = "[nama]";
pub const LINK_PLACEHOLDER: &str = "[link-undangan]";

pub const GUEST_NAME_FALLBACK: &str = "Invited Guest";
pub const LINK_FALLBACK: &str = "Invitation link will follow.";

static NAME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[nama\]").expect("name placeholder pattern")
});

static LINK_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[link-undangan\]").expect("link placeholder pattern")
});

pub const FORMAL_TEMPLATE: &str = "\
Dear [nama],

With great respect, we would be honoured by your presence at our wedding.

Please open the digital invitation below for the event details and to confirm your attendance:
[link-undangan]

Thank you for your presence and your blessings.";

pub const RELIGIOUS_TEMPLATE: &str = "\
Assalamualaikum Warahmatullahi Wabarakatuh,

By the grace and blessing of Allah SWT, we humbly invite [nama] to attend and offer prayers at our wedding.

The event details and attendance confirmation are available at the link below:
[link-undangan]

For your attention and presence, we say Jazakumullahu Khairan.
Wassalamualaikum Warahmatullahi Wabarakatuh.";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKey {
    Formal,
    Religious,
    Custom,
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct IntroTemplate {
    pub key: TemplateKey,
    pub label: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

pub const BUILT_IN_TEMPLATES: [IntroTemplate; 2] = [
    IntroTemplate {
        key: TemplateKey::Formal,
        label: "Formal Template",
        description: "Respectful, professional greeting.",
        content: FORMAL_TEMPLATE,
    },
    IntroTemplate {
        key: TemplateKey::Religious,
        label: "Religious Template",
        description: "Islamic greeting with a prayer.",
        content: RELIGIOUS_TEMPLATE,
    },
];

pub fn find_template(key: &str) -> Option<&'static IntroTemplate> {
    BUILT_IN_TEMPLATES.iter().find(|t| match t.key {
        TemplateKey::Formal => key == "formal",
        TemplateKey::Religious => key == "religious",
        TemplateKey::Custom => false,
    })
}

/// Which built-in template `content` is, verbatim, or `Custom`.
pub fn detect_template_key(content: &str) -> TemplateKey {
    BUILT_IN_TEMPLATES
        .iter()
        .find(|t| t.content == content)
        .map(|t| t.key)
        .unwrap_or(TemplateKey::Custom)
}

/// Fills a free-text invitation with a guest's name and link.
///
/// The result always mentions both: a template without `[nama]` gets a
/// `Dear, <name>,` greeting prepended, and one without `[link-undangan]`
/// gets an `Invitation link: ...` line appended.
pub fn render(template: &str, name: &str, link: &str) -> String {
    let safe_name = match name.trim() {
        "" => GUEST_NAME_FALLBACK,
        trimmed => trimmed,
    };
    let safe_link = link.trim();
    let link_replacement = if safe_link.is_empty() { LINK_FALLBACK } else { safe_link };

    let has_name = NAME_TOKEN.is_match(template);
    let has_link = LINK_TOKEN.is_match(template);

    // NoExpand keeps `$` in names and URLs literal.
    let with_name = NAME_TOKEN.replace_all(template, regex::NoExpand(safe_name));
    let mut result = LINK_TOKEN
        .replace_all(&with_name, regex::NoExpand(link_replacement))
        .into_owned();

    if !has_name {
        result = format!("Dear, {safe_name},\n\n{result}");
    }

    if !has_link {
        let link_line = if safe_link.is_empty() {
            LINK_FALLBACK.to_string()
        } else {
            format!("Invitation link: {safe_link}")
        };
        result = format!("{result}\n\n{link_line}");
    }

    result.trim().to_string()
}
