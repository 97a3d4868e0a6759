use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fallback cover image applied when a record carries neither an upload
/// nor an explicit URL.
pub const DEFAULT_COVER_URL: &str =
    "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=300&h=400&fit=crop";

/// Fallback document location for records without an upload or URL.
pub const DEFAULT_PDF_URL: &str = "/mock-pdfs/default.pdf";

/// Page count assumed by the reading view when a record does not state one.
const DEFAULT_PAGE_COUNT: u32 = 100;

/// A catalog entry, persisted as part of the JSON array under the
/// `libraryBooks` storage key.
///
/// `id` and `upload_date` are set once at creation and never mutated.
/// `cover_data`/`pdf_data` hold embedded data URLs that take precedence
/// over the corresponding URL fallbacks for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: String,
    pub subcategory: String,
    pub cover_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_data: Option<String>,
    pub pdf_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_data: Option<String>,
    pub upload_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl Book {
    /// Generate a fresh time-derived id token. The store itself never
    /// generates ids; creation callers do.
    pub fn generate_id() -> String {
        chrono::Utc::now().timestamp_millis().to_string()
    }

    /// The cover location to display: embedded data when present, URL fallback otherwise.
    pub fn display_cover(&self) -> &str {
        self.cover_data.as_deref().unwrap_or(&self.cover_url)
    }

    /// The document location to display: embedded data when present, URL fallback otherwise.
    pub fn display_document(&self) -> &str {
        self.pdf_data.as_deref().unwrap_or(&self.pdf_url)
    }

    /// Reading progress percentage for the given page, against the stated
    /// page count or the reading view's default.
    pub fn reading_progress(&self, current_page: u32) -> f32 {
        let total = self.pages.unwrap_or(DEFAULT_PAGE_COUNT).max(1);
        (current_page as f32 / total as f32) * 100.0
    }
}

/// Identifier of the active screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Home,
    Catalog,
    Viewer,
    Login,
    Admin,
}
