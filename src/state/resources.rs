//! Content sections and the resources that load them
//!
//! One constructor per kind of remote content. Each call mounts a fresh
//! [`RemoteResource`]; consumers own theirs and nothing is shared between
//! them.

use crate::api::{
    Achievement, ApiClient, ApiResponse, Equipment, GalleryItem, GuestbookPage, NewsPage, Page,
    QslCard, StationInfo, StationStatusInfo,
};
use crate::error::FetchResult;
use crate::i18n::TextKey;
use crate::resource::RemoteResource;
use crate::state::AppState;
use futures_util::FutureExt;
use std::future::Future;

/// Content sections of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Station,
    Equipment,
    Qsl,
    Achievements,
    News,
    Gallery,
    Guestbook,
}

impl Section {
    /// All sections, in page order
    pub const ALL: &'static [Section] = &[
        Section::Station,
        Section::Equipment,
        Section::Qsl,
        Section::Achievements,
        Section::News,
        Section::Gallery,
        Section::Guestbook,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Section::Station => "station",
            Section::Equipment => "equipment",
            Section::Qsl => "qsl",
            Section::Achievements => "achievements",
            Section::News => "news",
            Section::Gallery => "gallery",
            Section::Guestbook => "guestbook",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Navigation label
    pub fn nav_key(self) -> TextKey {
        match self {
            Section::Station => TextKey::NavAbout,
            Section::Equipment => TextKey::NavEquipment,
            Section::Qsl => TextKey::NavQsl,
            Section::Achievements => TextKey::NavAchievements,
            Section::News => TextKey::NavNews,
            Section::Gallery => TextKey::NavGallery,
            Section::Guestbook => TextKey::NavGuestbook,
        }
    }
}

fn without_deps<T, F, Fut>(client: &ApiClient, call: F) -> RemoteResource<T>
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult<ApiResponse<T>>> + Send + 'static,
{
    let client = client.clone();
    RemoteResource::without_deps(move || call(client.clone()).boxed())
}

fn paged<T, F, Fut>(client: &ApiClient, page: Page, call: F) -> RemoteResource<T, Page>
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient, Page) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult<ApiResponse<T>>> + Send + 'static,
{
    let client = client.clone();
    RemoteResource::mount(move |page: &Page| call(client.clone(), *page).boxed(), page)
}

pub fn station_resource(client: &ApiClient) -> RemoteResource<StationInfo> {
    without_deps(client, |c| async move { c.station_info().await })
}

pub fn station_status_resource(client: &ApiClient) -> RemoteResource<StationStatusInfo> {
    without_deps(client, |c| async move { c.station_status().await })
}

pub fn equipment_resource(client: &ApiClient) -> RemoteResource<Vec<Equipment>> {
    without_deps(client, |c| async move { c.equipment().await })
}

pub fn qsl_cards_resource(client: &ApiClient) -> RemoteResource<Vec<QslCard>> {
    without_deps(client, |c| async move { c.qsl_cards().await })
}

pub fn achievements_resource(client: &ApiClient) -> RemoteResource<Vec<Achievement>> {
    without_deps(client, |c| async move { c.achievements().await })
}

/// News; refetches when the page changes
pub fn news_resource(client: &ApiClient, page: Page) -> RemoteResource<NewsPage, Page> {
    paged(client, page, |c, page| async move { c.news(page).await })
}

pub fn gallery_resource(client: &ApiClient) -> RemoteResource<Vec<GalleryItem>> {
    without_deps(client, |c| async move { c.gallery().await })
}

/// Guestbook; refetches when the page changes
pub fn guestbook_resource(client: &ApiClient, page: Page) -> RemoteResource<GuestbookPage, Page> {
    paged(client, page, |c, page| async move { c.guestbook(page).await })
}

/// Station details and the live on-air status, loaded side by side
pub struct StationResources {
    pub info: RemoteResource<StationInfo>,
    pub status: RemoteResource<StationStatusInfo>,
}

impl StationResources {
    pub fn mount(client: &ApiClient) -> Self {
        Self {
            info: station_resource(client),
            status: station_status_resource(client),
        }
    }
}

/// A section together with its mounted resource
pub enum MountedSection {
    Station(StationResources),
    Equipment(RemoteResource<Vec<Equipment>>),
    Qsl(RemoteResource<Vec<QslCard>>),
    Achievements(RemoteResource<Vec<Achievement>>),
    News(RemoteResource<NewsPage, Page>),
    Gallery(RemoteResource<Vec<GalleryItem>>),
    Guestbook(RemoteResource<GuestbookPage, Page>),
}

impl MountedSection {
    /// Mount the resource backing `section`; starts fetching immediately
    pub fn mount(section: Section, state: &AppState) -> Self {
        let client = &state.client;
        match section {
            Section::Station => MountedSection::Station(StationResources::mount(client)),
            Section::Equipment => MountedSection::Equipment(equipment_resource(client)),
            Section::Qsl => MountedSection::Qsl(qsl_cards_resource(client)),
            Section::Achievements => MountedSection::Achievements(achievements_resource(client)),
            Section::News => MountedSection::News(news_resource(client, state.news_page())),
            Section::Gallery => MountedSection::Gallery(gallery_resource(client)),
            Section::Guestbook => {
                MountedSection::Guestbook(guestbook_resource(client, state.guestbook_page()))
            }
        }
    }

    pub fn section(&self) -> Section {
        match self {
            MountedSection::Station(_) => Section::Station,
            MountedSection::Equipment(_) => Section::Equipment,
            MountedSection::Qsl(_) => Section::Qsl,
            MountedSection::Achievements(_) => Section::Achievements,
            MountedSection::News(_) => Section::News,
            MountedSection::Gallery(_) => Section::Gallery,
            MountedSection::Guestbook(_) => Section::Guestbook,
        }
    }

    /// Manual retry, as offered next to an error message
    pub fn refetch(&self) {
        match self {
            MountedSection::Station(r) => {
                r.info.refetch();
                r.status.refetch();
            }
            MountedSection::Equipment(r) => r.refetch(),
            MountedSection::Qsl(r) => r.refetch(),
            MountedSection::Achievements(r) => r.refetch(),
            MountedSection::News(r) => r.refetch(),
            MountedSection::Gallery(r) => r.refetch(),
            MountedSection::Guestbook(r) => r.refetch(),
        }
    }

    pub fn loading(&self) -> bool {
        match self {
            MountedSection::Station(r) => r.info.loading() || r.status.loading(),
            MountedSection::Equipment(r) => r.loading(),
            MountedSection::Qsl(r) => r.loading(),
            MountedSection::Achievements(r) => r.loading(),
            MountedSection::News(r) => r.loading(),
            MountedSection::Gallery(r) => r.loading(),
            MountedSection::Guestbook(r) => r.loading(),
        }
    }

    /// Failure message of the section
    ///
    /// For the station only the details count; a failed live status falls
    /// back to the status stored with the station.
    pub fn error(&self) -> Option<String> {
        match self {
            MountedSection::Station(r) => r.info.error(),
            MountedSection::Equipment(r) => r.error(),
            MountedSection::Qsl(r) => r.error(),
            MountedSection::Achievements(r) => r.error(),
            MountedSection::News(r) => r.error(),
            MountedSection::Gallery(r) => r.error(),
            MountedSection::Guestbook(r) => r.error(),
        }
    }
}
