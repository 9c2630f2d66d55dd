/// Static localization table
///
/// Every piece of UI text lives in one `LocaleText` entry per language.
/// There is no fallback merging: adding a language means adding a complete
/// parallel entry in its own submodule, and completeness is enforced by the
/// struct itself.

mod de;
mod en;

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    De,
    En,
}

impl Language {
    /// The other supported language (the toggle button target)
    pub fn toggled(self) -> Self {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }

    /// Language name as embedded in the analysis prompt
    pub fn prompt_name(self) -> &'static str {
        match self {
            Language::De => "German",
            Language::En => "English",
        }
    }

    /// Look up the localization table for this language
    pub fn text(self) -> &'static LocaleText {
        match self {
            Language::De => &de::TEXT,
            Language::En => &en::TEXT,
        }
    }
}

/// All localized UI strings
pub struct LocaleText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub author1: &'static str,
    pub and: &'static str,
    pub author2: &'static str,
    pub language_toggle: &'static str,
    pub upload_placeholder: &'static str,
    pub safety_note: &'static str,
    pub category_label: &'static str,
    pub category_placeholder: &'static str,
    pub button_start: &'static str,
    pub button_processing: &'static str,
    pub empty_state_title: &'static str,
    pub empty_state_sub: &'static str,
    pub summary_title: &'static str,
    pub insight_title: &'static str,
    pub how_feeling: &'static str,
    pub legal_title: &'static str,
    pub legal_text: &'static str,
    pub terms_title: &'static str,
    pub terms_text: &'static str,
    pub error_safety: &'static str,
    pub error_general: &'static str,
}
