//! Azerbaijani texts

use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::NavHome => "Ana Səhifə",
        TextKey::NavAbout => "Haqqında",
        TextKey::NavEquipment => "Avadanlıq",
        TextKey::NavQsl => "QSL Kartları",
        TextKey::NavContacts => "Əlaqə",
        TextKey::NavGallery => "Qalereya",
        TextKey::NavAchievements => "Nailiyyətlər",
        TextKey::NavNews => "Xəbərlər",
        TextKey::NavTechnical => "Texniki Məlumat",
        TextKey::NavGuestbook => "Qonaq Kitabı",

        TextKey::HeroTitle => "4K6AG",
        TextKey::HeroSubtitle => "Azərbaycan Radioamatör Stansiyası",
        TextKey::HeroDescription => {
            "Qədim Azərbaycan torpağından dünyaya səs verən radioamatör stansiyası"
        }
        TextKey::HeroStatus => "Stansiya Statusu",
        TextKey::HeroOnline => "Efirdə",
        TextKey::HeroOffline => "Efirdən Kənar",

        TextKey::AboutTitle => "Stansiya Haqqında",
        TextKey::AboutDescription => {
            "4K6AG radioamatör stansiyası Azərbaycanda yerləşir və dünya radioamatörləri ilə əlaqə qurur."
        }
        TextKey::AboutOperator => "Operator",
        TextKey::AboutLocation => "Yerləşdiyim yer",
        TextKey::AboutGrid => "Grid Kvadratı",
        TextKey::AboutLicense => "Lisenziya Klass",

        TextKey::EquipmentTitle => "Avadanlıqlarımız",
        TextKey::EquipmentTransceiver => "Transiver",
        TextKey::EquipmentAntenna => "Antenna",
        TextKey::EquipmentPower => "Güc",
        TextKey::EquipmentBands => "Diapazonlar",

        TextKey::QslTitle => "QSL Kartları",
        TextKey::QslRequest => "QSL Sorğusu",
        TextKey::QslGallery => "QSL Qalereya",
        TextKey::QslInfo => "QSL məlumatları və təsdiq prosesi",

        TextKey::ContactTitle => "Əlaqə",
        TextKey::ContactName => "Ad",
        TextKey::ContactEmail => "E-poçt",
        TextKey::ContactCallsign => "Çağırış işarəsi",
        TextKey::ContactMessage => "Mesaj",
        TextKey::ContactSubmit => "Göndər",
        TextKey::ContactQslRequest => "QSL Sorğusu",

        TextKey::FooterCopyright => "Müəllif hüquqları © 2025 4K6AG. Bütün hüquqlar qorunur.",
        TextKey::FooterContact => "Əlaqə: 4k6ag@example.com",
    }
}
