use iced::{Application, Command, Element, Theme};
use log::{info, warn};
use std::sync::Arc;

use crate::client::config::ClientConfig;
use crate::client::gui::views;
use crate::client::models::account::detail_route;
use crate::client::models::messages::Message;
use crate::client::models::overview::AccountOverview;
use crate::client::services::account_service::AccountService;
use crate::client::utils::session_store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Overview,
    AccountDetail { account_id: String },
}

pub struct FinTrustApp {
    pub screen: Screen,
    pub overview: AccountOverview,
    pub account_service: Arc<AccountService>,
}

impl Application for FinTrustApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let account_service = Arc::new(AccountService::new(&config));

        // The acting user is whoever the session store knows about, read once
        // here; changing users means restarting the app.
        let user_id = session_store::load_user_id().unwrap_or_default();
        if user_id.is_empty() {
            warn!("[app] no user id in session store, the backend will reject the fetch");
        }

        let mut overview = AccountOverview::new(user_id);
        let startup = overview.start(&account_service);
        let app = FinTrustApp {
            screen: Screen::Overview,
            overview,
            account_service,
        };
        (app, startup)
    }

    fn title(&self) -> String {
        "FinTrust".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::OpenAccountDetail(account_id) => {
                info!("[app] navigating to {}", detail_route(&account_id));
                self.screen = Screen::AccountDetail { account_id };
                Command::none()
            }
            Message::BackToOverview => {
                self.screen = Screen::Overview;
                Command::none()
            }
            other => self.overview.update(other, &self.account_service),
        }
    }

    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Overview => views::account_overview::view(&self.overview),
            Screen::AccountDetail { account_id } => views::account_detail::view(account_id),
        }
    }
}
