//! Translation keys
//!
//! Every piece of UI text is addressed by a [`TextKey`]. Each key maps to
//! exactly one dotted path (`"hero.status"`), and each locale table is an
//! exhaustive match over the keys, so a locale missing a translation does
//! not compile.

macro_rules! text_keys {
    ($($variant:ident => $path:literal,)*) => {
        /// A known piece of UI text
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($variant,)*
        }

        impl TextKey {
            /// All keys, in dictionary order
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)*];

            /// Dotted path of this key
            pub fn path(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $path,)*
                }
            }

            /// Parse a dotted path; `None` for anything that is not a terminal entry
            pub fn from_path(path: &str) -> Option<Self> {
                match path {
                    $($path => Some(TextKey::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

text_keys! {
    // Navigation
    NavHome => "nav.home",
    NavAbout => "nav.about",
    NavEquipment => "nav.equipment",
    NavQsl => "nav.qsl",
    NavContacts => "nav.contacts",
    NavGallery => "nav.gallery",
    NavAchievements => "nav.achievements",
    NavNews => "nav.news",
    NavTechnical => "nav.technical",
    NavGuestbook => "nav.guestbook",

    // Hero section
    HeroTitle => "hero.title",
    HeroSubtitle => "hero.subtitle",
    HeroDescription => "hero.description",
    HeroStatus => "hero.status",
    HeroOnline => "hero.online",
    HeroOffline => "hero.offline",

    // About section
    AboutTitle => "about.title",
    AboutDescription => "about.description",
    AboutOperator => "about.operator",
    AboutLocation => "about.location",
    AboutGrid => "about.grid",
    AboutLicense => "about.license",

    // Equipment
    EquipmentTitle => "equipment.title",
    EquipmentTransceiver => "equipment.transceiver",
    EquipmentAntenna => "equipment.antenna",
    EquipmentPower => "equipment.power",
    EquipmentBands => "equipment.bands",

    // QSL
    QslTitle => "qsl.title",
    QslRequest => "qsl.request",
    QslGallery => "qsl.gallery",
    QslInfo => "qsl.info",

    // Contact form
    ContactTitle => "contact.title",
    ContactName => "contact.name",
    ContactEmail => "contact.email",
    ContactCallsign => "contact.callsign",
    ContactMessage => "contact.message",
    ContactSubmit => "contact.submit",
    ContactQslRequest => "contact.qslRequest",

    // Footer
    FooterCopyright => "footer.copyright",
    FooterContact => "footer.contact",
}

impl std::fmt::Display for TextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = TextKey::ALL.iter().map(|k| k.path()).collect();
        assert_eq!(paths.len(), TextKey::ALL.len());
    }

    #[test]
    fn test_from_path_inverts_path() {
        for key in TextKey::ALL {
            assert_eq!(TextKey::from_path(key.path()), Some(*key));
        }
    }

    #[test]
    fn test_section_paths_are_not_keys() {
        assert_eq!(TextKey::from_path("hero"), None);
        assert_eq!(TextKey::from_path("hero.status.extra"), None);
        assert_eq!(TextKey::from_path(""), None);
    }
}
