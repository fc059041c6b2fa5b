//! English texts

use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::NavHome => "Home",
        TextKey::NavAbout => "About",
        TextKey::NavEquipment => "Equipment",
        TextKey::NavQsl => "QSL Cards",
        TextKey::NavContacts => "Contacts",
        TextKey::NavGallery => "Gallery",
        TextKey::NavAchievements => "Achievements",
        TextKey::NavNews => "News",
        TextKey::NavTechnical => "Technical Info",
        TextKey::NavGuestbook => "Guestbook",

        TextKey::HeroTitle => "4K6AG",
        TextKey::HeroSubtitle => "Azerbaijan Amateur Radio Station",
        TextKey::HeroDescription => {
            "Amateur radio station broadcasting to the world from ancient Azerbaijan land"
        }
        TextKey::HeroStatus => "Station Status",
        TextKey::HeroOnline => "On Air",
        TextKey::HeroOffline => "Off Air",

        TextKey::AboutTitle => "About Station",
        TextKey::AboutDescription => {
            "Amateur radio station 4K6AG is located in Azerbaijan and maintains contact with amateur radio operators worldwide."
        }
        TextKey::AboutOperator => "Operator",
        TextKey::AboutLocation => "Location",
        TextKey::AboutGrid => "Grid Square",
        TextKey::AboutLicense => "License Class",

        TextKey::EquipmentTitle => "Our Equipment",
        TextKey::EquipmentTransceiver => "Transceiver",
        TextKey::EquipmentAntenna => "Antenna",
        TextKey::EquipmentPower => "Power",
        TextKey::EquipmentBands => "Bands",

        TextKey::QslTitle => "QSL Cards",
        TextKey::QslRequest => "QSL Request",
        TextKey::QslGallery => "QSL Gallery",
        TextKey::QslInfo => "QSL information and confirmation process",

        TextKey::ContactTitle => "Contacts",
        TextKey::ContactName => "Name",
        TextKey::ContactEmail => "Email",
        TextKey::ContactCallsign => "Callsign",
        TextKey::ContactMessage => "Message",
        TextKey::ContactSubmit => "Send",
        TextKey::ContactQslRequest => "QSL Request",

        TextKey::FooterCopyright => "© 2025 4K6AG. All rights reserved.",
        TextKey::FooterContact => "Contact: 4k6ag@example.com",
    }
}
