use super::LocaleText;

pub(super) static TEXT: LocaleText = LocaleText {
    title: "CEP Analyzer",
    subtitle: "Visual scene analysis inspired by the 7W Framework by ",
    author1: "Jenni Romaniuk",
    and: " and the ",
    author2: "Ehrenberg-Bass Institute",
    language_toggle: "DEUTSCH",
    upload_placeholder: "Drag image here or click",
    safety_note: "Content filter active",
    category_label: "Category (Optional)",
    category_placeholder: "e.g., Coffee, Snacks, Insurance...",
    button_start: "Start AI Analysis",
    button_processing: "Analyzing...",
    empty_state_title: "Ready to Analyze",
    empty_state_sub: "Upload a scene to identify motives and contexts.",
    summary_title: "Summary",
    insight_title: "Strategic Insight",
    how_feeling: "hoW (Feeling)",
    legal_title: "Privacy & Security",
    legal_text: "Images are not stored and not used for AI training. Processing is transient in memory and deleted after the session ends.",
    terms_title: "Guidelines & Terms",
    terms_text: "No pornographic, violent, or racist content allowed. Use at your own risk. Automated content filters are active.",
    error_safety: "Safety Filter: Content blocked.",
    error_general: "Analysis failed (Limit reached or API error).",
};
