//! Root application state container
//!
//! The context handed to every consumer: configuration, the backend client,
//! the locale store and the transient status line. Nothing here is global;
//! consumers receive it (or the parts they need) explicitly.

use crate::api::{ApiClient, Page};
use crate::config::Config;
use crate::contact::ContactForm;
use crate::error::AppResult;
use crate::i18n::{resolve_locale, LocaleStore};
use std::time::Instant;

/// Root application state
#[derive(Debug)]
pub struct AppState {
    /// User configuration
    pub config: Config,

    /// Backend client shared by all resources
    pub client: ApiClient,

    /// Active locale and translations
    pub locale: LocaleStore,

    /// Contact / QSL request form
    pub contact_form: ContactForm,

    /// Status line message (submission results and the like)
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Create the application state from a loaded configuration
    pub fn new(config: Config) -> AppResult<Self> {
        let client = ApiClient::from_config(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Create the application state around an existing client
    pub fn with_client(config: Config, client: ApiClient) -> Self {
        Self {
            config,
            client,
            locale: LocaleStore::new(),
            contact_form: ContactForm::new(),
            status_message: None,
        }
    }

    /// Pick the startup locale: CLI flag, configured language, then the system
    pub fn initialize_locale(&mut self, cli_lang: Option<&str>) {
        let configured = self.config.language.clone();
        self.locale
            .initialize(|| resolve_locale(cli_lang, configured.as_deref()));
    }

    /// First news page per configuration
    pub fn news_page(&self) -> Page {
        Page::new(self.config.news_page_size, 0)
    }

    /// First guestbook page per configuration
    pub fn guestbook_page(&self) -> Page {
        Page::new(self.config.guestbook_page_size, 0)
    }

    /// Submit the contact form and report the outcome on the status line
    pub async fn submit_contact_form(&mut self) -> bool {
        match self.contact_form.submit(&self.client).await {
            Ok(message) => {
                self.set_status(message, StatusLevel::Info);
                true
            }
            Err(err) => {
                self.set_status(err.user_message(), StatusLevel::Error);
                false
            }
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
            timestamp: Instant::now(),
        });
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Status line message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message text
    pub text: String,

    /// Message level
    pub level: StatusLevel,

    /// When the message was set
    pub timestamp: Instant,
}

/// Status message level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}
