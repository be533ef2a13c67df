//! Supported language table
//!
//! The set of language codes the speech services can handle. Membership
//! checks are case-insensitive; unknown codes display as "Unknown".

/// Language codes and display names supported by the speech synthesis backend
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish (Español)"),
    ("fr", "French (Français)"),
    ("de", "German (Deutsch)"),
    ("it", "Italian (Italiano)"),
    ("pt", "Portuguese (Português)"),
    ("pl", "Polish (Polski)"),
    ("tr", "Turkish (Türkçe)"),
    ("ru", "Russian (Русский)"),
    ("nl", "Dutch (Nederlands)"),
    ("sv", "Swedish (Svenska)"),
    ("ar", "Arabic (العربية)"),
    ("hi", "Hindi (हिन्दी)"),
    ("ko", "Korean (한국어)"),
    ("ja", "Japanese (日本語)"),
    ("zh", "Chinese (中文)"),
    ("id", "Indonesian (Bahasa Indonesia)"),
    ("fil", "Filipino"),
    ("uk", "Ukrainian (Українська)"),
    ("el", "Greek (Ελληνικά)"),
    ("cs", "Czech (Čeština)"),
    ("fi", "Finnish (Suomi)"),
    ("ro", "Romanian (Română)"),
    ("da", "Danish (Dansk)"),
    ("bg", "Bulgarian (Български)"),
    ("ms", "Malay (Bahasa Melayu)"),
    ("sk", "Slovak (Slovenčina)"),
    ("hr", "Croatian (Hrvatski)"),
    ("ta", "Tamil (தமிழ்)"),
];

/// Check whether a language code is supported (case-insensitive)
pub fn is_supported(code: &str) -> bool {
    lookup(code).is_some()
}

/// Get the display name for a supported code, if any
pub fn lookup(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Get the display name for a language code, defaulting to "Unknown"
pub fn display_name(code: &str) -> &'static str {
    lookup(code).unwrap_or("Unknown")
}

/// Iterate over all supported `(code, name)` pairs
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    SUPPORTED_LANGUAGES.iter().copied()
}
