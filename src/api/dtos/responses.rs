use serde::Serialize;

use crate::domain::services::template::IntroTemplate;

/// Envelope for every successful payload.
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesResponse {
    pub templates: Vec<IntroTemplate>,
    pub name_placeholder: &'static str,
    pub link_placeholder: &'static str,
}
