//! Russian texts

use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::NavHome => "Главная",
        TextKey::NavAbout => "О станции",
        TextKey::NavEquipment => "Оборудование",
        TextKey::NavQsl => "QSL Карточки",
        TextKey::NavContacts => "Контакты",
        TextKey::NavGallery => "Галерея",
        TextKey::NavAchievements => "Достижения",
        TextKey::NavNews => "Новости",
        TextKey::NavTechnical => "Техническая информация",
        TextKey::NavGuestbook => "Гостевая книга",

        TextKey::HeroTitle => "4K6AG",
        TextKey::HeroSubtitle => "Азербайджанская радиолюбительская станция",
        TextKey::HeroDescription => {
            "Радиолюбительская станция, вещающая в мир с древней азербайджанской земли"
        }
        TextKey::HeroStatus => "Статус станции",
        TextKey::HeroOnline => "В эфире",
        TextKey::HeroOffline => "Не в эфире",

        TextKey::AboutTitle => "О станции",
        TextKey::AboutDescription => {
            "Радиолюбительская станция 4K6AG расположена в Азербайджане и поддерживает связь с радиолюбителями всего мира."
        }
        TextKey::AboutOperator => "Оператор",
        TextKey::AboutLocation => "Местоположение",
        TextKey::AboutGrid => "Grid локатор",
        TextKey::AboutLicense => "Класс лицензии",

        TextKey::EquipmentTitle => "Наше оборудование",
        TextKey::EquipmentTransceiver => "Трансивер",
        TextKey::EquipmentAntenna => "Антенна",
        TextKey::EquipmentPower => "Мощность",
        TextKey::EquipmentBands => "Диапазоны",

        TextKey::QslTitle => "QSL Карточки",
        TextKey::QslRequest => "Запрос QSL",
        TextKey::QslGallery => "Галерея QSL",
        TextKey::QslInfo => "Информация о QSL и процесс подтверждения",

        TextKey::ContactTitle => "Контакты",
        TextKey::ContactName => "Имя",
        TextKey::ContactEmail => "E-mail",
        TextKey::ContactCallsign => "Позывной",
        TextKey::ContactMessage => "Сообщение",
        TextKey::ContactSubmit => "Отправить",
        TextKey::ContactQslRequest => "Запрос QSL",

        TextKey::FooterCopyright => "© 2025 4K6AG. Все права защищены.",
        TextKey::FooterContact => "Контакт: 4k6ag@example.com",
    }
}
