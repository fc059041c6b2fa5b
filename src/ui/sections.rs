//! Section views
//!
//! Each view takes the loaded data and the locale store and returns plain
//! text. Data coming from the backend is shown as-is; only labels are
//! translated.

use super::status::render_state;
use crate::api::{
    Achievement, Equipment, EquipmentType, GalleryItem, GuestbookPage, NewsCategory, NewsPage,
    Page, QslCard, StationInfo, StationStatus, StationStatusInfo,
};
use crate::i18n::{Locale, LocaleStore, TextKey};
use crate::state::{MountedSection, Section};

/// Heading shown above a section
pub fn section_title(section: Section) -> TextKey {
    match section {
        Section::Station => TextKey::AboutTitle,
        Section::Equipment => TextKey::EquipmentTitle,
        Section::Qsl => TextKey::QslTitle,
        other => other.nav_key(),
    }
}

/// Site title, navigation and the language switcher
pub fn header(locale: &LocaleStore) -> String {
    let nav = Section::ALL
        .iter()
        .map(|s| locale.text(s.nav_key()))
        .collect::<Vec<_>>()
        .join(" | ");
    format!(
        "{} - {}\n{}\n{}",
        locale.text(TextKey::HeroTitle),
        locale.text(TextKey::HeroSubtitle),
        nav,
        language_switcher(locale)
    )
}

/// Available locales, the active one bracketed
pub fn language_switcher(locale: &LocaleStore) -> String {
    let current = locale.current_locale();
    locale
        .available_locales()
        .iter()
        .map(|&l: &Locale| {
            let label = format!("{} {}", l.flag(), l.short_name());
            if l == current {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn footer(locale: &LocaleStore) -> String {
    format!(
        "{}\n{}",
        locale.text(TextKey::FooterCopyright),
        locale.text(TextKey::FooterContact)
    )
}

/// Station details; `live` overrides the status stored with the station
pub fn render_station(
    locale: &LocaleStore,
    info: &StationInfo,
    live: Option<&StationStatusInfo>,
) -> String {
    let status = match live.map_or(info.status, |l| l.status) {
        StationStatus::Online => TextKey::HeroOnline,
        StationStatus::Offline => TextKey::HeroOffline,
    };
    let mut status_line = format!("{}: {}", locale.text(TextKey::HeroStatus), locale.text(status));
    let on_air: Vec<&str> = live
        .into_iter()
        .flat_map(|l| [l.frequency.as_deref(), l.mode.as_deref()])
        .flatten()
        .collect();
    if !on_air.is_empty() {
        status_line.push_str(&format!(" ({})", on_air.join(" ")));
    }

    [
        status_line,
        format!("{}: {}", locale.text(TextKey::AboutOperator), info.operator),
        format!("{}: {}", locale.text(TextKey::AboutLocation), info.location),
        format!("{}: {}", locale.text(TextKey::AboutGrid), info.grid),
        format!("{}: {}", locale.text(TextKey::AboutLicense), info.license),
    ]
    .join("\n")
}

// The dictionary has no entries for amplifiers, other gear or antenna gain;
// those labels stay English in every locale.
fn equipment_kind(locale: &LocaleStore, kind: EquipmentType) -> &'static str {
    match kind {
        EquipmentType::Transceiver => locale.text(TextKey::EquipmentTransceiver),
        EquipmentType::Antenna => locale.text(TextKey::EquipmentAntenna),
        EquipmentType::Amplifier => "Amplifier",
        EquipmentType::Other => "Other",
    }
}

pub fn render_equipment(locale: &LocaleStore, items: &[Equipment]) -> String {
    let mut lines = Vec::new();
    for item in items {
        lines.push(format!(
            "- {} ({}): {}",
            item.name,
            equipment_kind(locale, item.kind),
            item.specs
        ));
        if let Some(power) = &item.power {
            lines.push(format!("    {}: {}", locale.text(TextKey::EquipmentPower), power));
        }
        if let Some(gain) = &item.gain {
            lines.push(format!("    Gain: {}", gain));
        }
        if let Some(bands) = &item.bands {
            lines.push(format!("    {}: {}", locale.text(TextKey::EquipmentBands), bands));
        }
    }
    lines.join("\n")
}

pub fn render_qsl_cards(locale: &LocaleStore, cards: &[QslCard]) -> String {
    let mut lines = vec![locale.text(TextKey::QslInfo).to_string()];
    lines.extend(
        cards
            .iter()
            .map(|card| format!("- {} {} <{}>", card.year, card.design, card.image)),
    );
    lines.join("\n")
}

pub fn render_achievements(achievements: &[Achievement]) -> String {
    achievements
        .iter()
        .map(|a| format!("- {} {}: {}", a.year, a.title, a.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn news_category(category: NewsCategory) -> &'static str {
    match category {
        NewsCategory::Equipment => "equipment",
        NewsCategory::Contests => "contests",
        NewsCategory::General => "general",
    }
}

/// Position within a paged listing, e.g. `1-10 / 42`
fn page_summary(page: Page, shown: usize, total: u64) -> String {
    if shown == 0 {
        return format!("0 / {}", total);
    }
    let first = u64::from(page.offset) + 1;
    format!("{}-{} / {}", first, first + shown as u64 - 1, total)
}

pub fn render_news(news: &NewsPage, page: Page) -> String {
    let mut lines = Vec::new();
    for item in &news.news {
        lines.push(format!(
            "{} [{}] {}",
            item.date.format("%Y-%m-%d"),
            news_category(item.category),
            item.title
        ));
        lines.push(format!("  {}", item.content));
    }
    lines.push(page_summary(page, news.news.len(), news.total));
    lines.join("\n")
}

pub fn render_gallery(items: &[GalleryItem]) -> String {
    items
        .iter()
        .map(|item| format!("- {}: {} <{}>", item.title, item.description, item.image))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Approved entries only; the range counts the entries shown
pub fn render_guestbook(guestbook: &GuestbookPage, page: Page) -> String {
    let mut lines = Vec::new();
    let approved: Vec<_> = guestbook.entries.iter().filter(|e| e.approved).collect();
    for entry in &approved {
        let mut author = entry.name.clone();
        if let Some(callsign) = &entry.callsign {
            author.push_str(&format!(" ({})", callsign));
        }
        if let Some(country) = &entry.country {
            author.push_str(&format!(", {}", country));
        }
        lines.push(format!(
            "{} {}: {}",
            entry.date.format("%Y-%m-%d"),
            author,
            entry.message
        ));
    }
    lines.push(page_summary(page, approved.len(), guestbook.total));
    lines.join("\n")
}

/// Wait for a mounted section to settle and render it under its heading
pub async fn render_section(locale: &LocaleStore, mounted: &MountedSection) -> String {
    let body = match mounted {
        MountedSection::Station(r) => {
            let live = r.status.settled().await;
            render_state(&r.info.settled().await, |info| {
                render_station(locale, info, live.data())
            })
        }
        MountedSection::Equipment(r) => {
            render_state(&r.settled().await, |items| render_equipment(locale, items))
        }
        MountedSection::Qsl(r) => {
            render_state(&r.settled().await, |cards| render_qsl_cards(locale, cards))
        }
        MountedSection::Achievements(r) => {
            render_state(&r.settled().await, |items| render_achievements(items))
        }
        MountedSection::News(r) => {
            let page = *r.deps();
            render_state(&r.settled().await, |news| render_news(news, page))
        }
        MountedSection::Gallery(r) => {
            render_state(&r.settled().await, |items| render_gallery(items))
        }
        MountedSection::Guestbook(r) => {
            let page = *r.deps();
            render_state(&r.settled().await, |entries| render_guestbook(entries, page))
        }
    };

    let title = locale.text(section_title(mounted.section()));
    format!("== {} ==\n{}", title, body)
}
