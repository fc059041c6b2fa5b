//! Internationalization (i18n) module for the station front-end
//!
//! Provides:
//! - The closed set of supported locales (Azerbaijani, Russian, English)
//! - A precompiled translation table per locale, keyed by [`TextKey`]
//! - [`LocaleStore`], the explicitly passed context every renderer reads from
//! - Initial locale resolution from CLI, config, or the operating system

mod az;
mod en;
pub mod keys;
mod ru;

pub use keys::TextKey;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Azerbaijani
    Az,
    /// Russian
    Ru,
    /// English
    #[default]
    En,
}

impl Locale {
    /// All supported locales, in language-switcher order
    pub const ALL: &'static [Locale] = &[Locale::Az, Locale::Ru, Locale::En];

    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Locale::Az => "az",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Short label shown in the language switcher
    pub fn short_name(self) -> &'static str {
        match self {
            Locale::Az => "AZ",
            Locale::Ru => "RU",
            Locale::En => "EN",
        }
    }

    /// Flag shown next to the label
    pub fn flag(self) -> &'static str {
        match self {
            Locale::Az => "🇦🇿",
            Locale::Ru => "🇷🇺",
            Locale::En => "🇺🇸",
        }
    }

    /// Parse an exact locale code (`"az"`, `"ru"`, `"en"`)
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "az" => Some(Locale::Az),
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Parse a BCP 47 / POSIX style tag by its primary language subtag
    ///
    /// `"ru-RU"`, `"az_Latn_AZ"` and `"EN.UTF-8"` are all accepted.
    pub fn from_language_tag(tag: &str) -> Option<Locale> {
        let primary = tag
            .split(|c| c == '-' || c == '_' || c == '.' || c == '@')
            .next()?
            .to_ascii_lowercase();
        Locale::from_code(&primary)
    }

    /// Translation table for this locale
    pub fn table(self) -> &'static TranslationTable {
        match self {
            Locale::Az => &AZ_TABLE,
            Locale::Ru => &RU_TABLE,
            Locale::En => &EN_TABLE,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Precompiled texts for one locale
#[derive(Debug)]
pub struct TranslationTable {
    locale: Locale,
    lookup: fn(TextKey) -> &'static str,
}

static AZ_TABLE: TranslationTable = TranslationTable {
    locale: Locale::Az,
    lookup: az::text,
};

static RU_TABLE: TranslationTable = TranslationTable {
    locale: Locale::Ru,
    lookup: ru::text,
};

static EN_TABLE: TranslationTable = TranslationTable {
    locale: Locale::En,
    lookup: en::text,
};

impl TranslationTable {
    /// Locale this table belongs to
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw stored text for a key (may in principle be empty)
    pub fn get(&self, key: TextKey) -> &'static str {
        (self.lookup)(key)
    }
}

/// Active locale and its translation table
///
/// Locale and table live in a single field, so switching languages is one
/// assignment and no reader can observe a locale paired with another
/// locale's table.
#[derive(Debug, Clone, Copy)]
pub struct LocaleStore {
    active: &'static TranslationTable,
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleStore {
    /// Create a store with the default locale active
    pub fn new() -> Self {
        Self {
            active: Locale::default().table(),
        }
    }

    /// Create a store with a given locale active
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            active: locale.table(),
        }
    }

    /// Pick the initial locale; called once at startup
    ///
    /// An unsupported detected code leaves the current locale in place.
    pub fn initialize(&mut self, detect: impl FnOnce() -> String) {
        let detected = detect();
        if self.set_locale(&detected) {
            log::info!("Using locale {}", self.current_locale());
        } else {
            log::warn!(
                "Detected locale '{}' is not supported, keeping {}",
                detected,
                self.current_locale()
            );
        }
    }

    /// Currently active locale
    pub fn current_locale(&self) -> Locale {
        self.active.locale
    }

    /// Active translation table
    pub fn table(&self) -> &'static TranslationTable {
        self.active
    }

    /// All locales the store can switch to
    pub fn available_locales(&self) -> &'static [Locale] {
        Locale::ALL
    }

    /// Switch to the locale with the given code
    ///
    /// Unknown codes are ignored. Returns whether the code was recognized.
    pub fn set_locale(&mut self, code: &str) -> bool {
        match Locale::from_code(code) {
            Some(locale) => {
                self.set(locale);
                true
            }
            None => {
                log::debug!("Ignoring unsupported locale '{}'", code);
                false
            }
        }
    }

    /// Switch to a known locale
    pub fn set(&mut self, locale: Locale) {
        self.active = locale.table();
    }

    /// Typed lookup; an empty stored value yields the key's path
    pub fn text(&self, key: TextKey) -> &'static str {
        match self.active.get(key) {
            "" => key.path(),
            value => value,
        }
    }

    /// Resolve a dotted path to display text
    ///
    /// Returns `path` itself for unknown paths, for paths naming a whole
    /// section, and for empty stored values.
    pub fn translate(&self, path: &str) -> String {
        match TextKey::from_path(path) {
            Some(key) => self.text(key).to_string(),
            None => path.to_string(),
        }
    }
}

/// Locale code reported by the operating system, mapped onto a supported locale
///
/// Anything unsupported or undetectable yields the default locale's code.
pub fn detect_locale() -> String {
    sys_locale::get_locale()
        .as_deref()
        .and_then(Locale::from_language_tag)
        .unwrap_or_default()
        .code()
        .to_string()
}

/// Locale code to start with: CLI flag, then config file, then the OS
pub fn resolve_locale(cli_lang: Option<&str>, configured: Option<&str>) -> String {
    let explicit = [cli_lang, configured]
        .into_iter()
        .flatten()
        .find_map(Locale::from_language_tag);

    match explicit {
        Some(locale) => locale.code().to_string(),
        None => detect_locale(),
    }
}
