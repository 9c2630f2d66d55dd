use super::LocaleText;

pub(super) static TEXT: LocaleText = LocaleText {
    title: "CEP Analyzer",
    subtitle: "Visuelle Szenenanalyse in Anlehnung an das 7W-Framework von ",
    author1: "Jenni Romaniuk",
    and: " und dem ",
    author2: "Ehrenberg-Bass Institute",
    language_toggle: "ENGLISH",
    upload_placeholder: "Bild hierher ziehen oder klicken",
    safety_note: "Inhaltsfilter aktiv",
    category_label: "Kategorie (Optional)",
    category_placeholder: "z.B. Kaffee, Snacks, Versicherung...",
    button_start: "KI-Analyse starten",
    button_processing: "Analysiere...",
    empty_state_title: "Bereit für Analyse",
    empty_state_sub: "Laden Sie eine Szene hoch, um Motive und Kontexte zu identifizieren.",
    summary_title: "Zusammenfassung",
    insight_title: "Strategischer Insight",
    how_feeling: "hoW (Feeling)",
    legal_title: "Datenschutz & Sicherheit",
    legal_text: "Bilder werden nicht gespeichert und nicht für KI-Training verwendet. Die Verarbeitung erfolgt flüchtig im Arbeitsspeicher und wird nach der Sitzung gelöscht.",
    terms_title: "Richtlinien & AGBS",
    terms_text: "Keine pornografischen, gewaltverherrlichenden oder rassistischen Inhalte erlaubt. Die Nutzung erfolgt auf eigene Gefahr. Automatisierte Inhaltsfilter sind aktiv.",
    error_safety: "Sicherheitsfilter: Inhalt blockiert.",
    error_general: "Analyse fehlgeschlagen (Limit erreicht oder API-Fehler).",
};
