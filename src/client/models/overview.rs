use std::sync::Arc;
use std::time::Duration;

use iced::Command;
use log::{debug, info, warn};

use crate::client::models::account::Account;
use crate::client::models::messages::{FetchKind, Message};
use crate::client::services::account_service::AccountService;

/// How long the non-blocking error bar stays up before dismissing itself.
pub const TRANSIENT_ERROR_TIMEOUT: Duration = Duration::from_secs(6);

/// Render state of the overview. Exactly one of these holds at any time and
/// every fetch resolution has a defined next state. The create-account dialog
/// flag lives inside `Empty` so a dialog over any other state cannot be
/// represented.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed(String),
    Empty { dialog_open: bool },
    Populated { accounts: Vec<Account> },
}

/// Pure projection of the state machine into one of the four mutually
/// exclusive screens. The transient error bar is reported separately via
/// [`AccountOverview::transient_error`] and overlays whichever screen is up.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<'a> {
    Loading,
    FullPageError { message: &'a str },
    Onboarding { dialog_open: bool },
    AccountList { accounts: &'a [Account] },
}

/// State machine behind the account overview screen.
///
/// The acting user id is injected at construction and immutable afterwards;
/// switching users means building a new `AccountOverview`. Every fetch is
/// tagged with a sequence number at issue time and a resolution is applied
/// only if no newer fetch has been issued since, so a slow request can never
/// overwrite the outcome of a later one.
pub struct AccountOverview {
    pub user_id: String,
    pub view_state: ViewState,
    pub has_fetched_once: bool,
    pub transient_error: Option<String>,
    pub transient_seq: u64,
    pub fetch_seq: u64,
    // create-account form
    pub new_account_name: String,
    pub create_in_flight: bool,
    pub create_error: Option<String>,
}

impl AccountOverview {
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            view_state: ViewState::Loading,
            has_fetched_once: false,
            transient_error: None,
            transient_seq: 0,
            fetch_seq: 0,
            new_account_name: String::new(),
            create_in_flight: false,
            create_error: None,
        }
    }

    /// Issue the initial fetch. Called exactly once, when the screen comes up.
    /// An empty user id is passed through as-is; the backend answers it with a
    /// well-defined failure.
    pub fn start(&mut self, service: &Arc<AccountService>) -> Command<Message> {
        self.issue_fetch(FetchKind::Initial, service)
    }

    fn issue_fetch(&mut self, kind: FetchKind, service: &Arc<AccountService>) -> Command<Message> {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let svc = Arc::clone(service);
        let user_id = self.user_id.clone();
        info!("[overview] issuing {:?} fetch (seq {})", kind, seq);
        Command::perform(
            async move { svc.fetch_accounts(&user_id).await },
            move |result| Message::AccountsFetched { seq, kind, result },
        )
    }

    pub fn update(
        &mut self,
        message: Message,
        service: &Arc<AccountService>,
    ) -> Command<Message> {
        match message {
            Message::AccountsFetched { seq, kind, result } => {
                if seq != self.fetch_seq {
                    debug!(
                        "[overview] discarding stale fetch resolution (seq {}, latest {})",
                        seq, self.fetch_seq
                    );
                    return Command::none();
                }
                match result {
                    Ok(accounts) => {
                        self.has_fetched_once = true;
                        info!("[overview] fetch resolved with {} accounts", accounts.len());
                        self.view_state = if accounts.is_empty() {
                            ViewState::Empty { dialog_open: false }
                        } else {
                            ViewState::Populated { accounts }
                        };
                    }
                    Err(err) => {
                        warn!("[overview] {:?} fetch failed: {}", kind, err);
                        let user_message = err.user_message();
                        match kind {
                            // Nothing was on screen yet; replace it wholesale.
                            FetchKind::Initial => {
                                self.view_state = ViewState::Failed(user_message);
                            }
                            // The user already has a valid screen; keep it and
                            // surface the failure as a self-dismissing bar.
                            FetchKind::Refetch => {
                                let (dismiss, delay) = self.raise_transient_error(user_message);
                                return Command::perform(
                                    async move {
                                        tokio::time::sleep(delay).await;
                                        dismiss
                                    },
                                    |msg| msg,
                                );
                            }
                        }
                    }
                }
                Command::none()
            }
            Message::OpenCreateAccountDialog => {
                if let ViewState::Empty { dialog_open } = &mut self.view_state {
                    *dialog_open = true;
                }
                Command::none()
            }
            Message::CloseCreateAccountDialog => {
                self.close_dialog();
                Command::none()
            }
            Message::NewAccountNameChanged(name) => {
                self.new_account_name = name;
                Command::none()
            }
            Message::SubmitCreateAccount => {
                if !matches!(self.view_state, ViewState::Empty { dialog_open: true }) {
                    return Command::none();
                }
                let name = self.new_account_name.trim().to_string();
                if name.is_empty() || self.create_in_flight {
                    return Command::none();
                }
                self.create_in_flight = true;
                self.create_error = None;
                let svc = Arc::clone(service);
                let user_id = self.user_id.clone();
                Command::perform(
                    async move { svc.create_account(&user_id, &name).await },
                    |result| Message::AccountCreated {
                        result: result.map(|_| ()),
                    },
                )
            }
            Message::AccountCreated { result } => {
                self.create_in_flight = false;
                match result {
                    Ok(()) => {
                        // Close the dialog and refresh. The previous state
                        // stays on screen until the refetch resolves; no
                        // bounce back through Loading.
                        self.close_dialog();
                        self.issue_fetch(FetchKind::Refetch, service)
                    }
                    Err(err) => {
                        self.create_error = Some(err.user_message());
                        Command::none()
                    }
                }
            }
            Message::DismissError { timer_seq } => {
                match timer_seq {
                    // A timer armed for a message that has since been
                    // replaced; the newer message keeps its own timer.
                    Some(seq) if seq != self.transient_seq => {}
                    _ => self.transient_error = None,
                }
                Command::none()
            }
            // Navigation is handled by the application shell.
            Message::OpenAccountDetail(_) | Message::BackToOverview => Command::none(),
        }
    }

    /// Puts `message` on the transient bar and returns the dismissal to
    /// schedule and how long to wait before delivering it. Each message gets
    /// a fresh generation; only the matching dismissal clears it.
    fn raise_transient_error(&mut self, message: String) -> (Message, Duration) {
        self.transient_error = Some(message);
        self.transient_seq += 1;
        (
            Message::DismissError {
                timer_seq: Some(self.transient_seq),
            },
            TRANSIENT_ERROR_TIMEOUT,
        )
    }

    fn close_dialog(&mut self) {
        if let ViewState::Empty { dialog_open } = &mut self.view_state {
            *dialog_open = false;
        }
        self.new_account_name.clear();
        self.create_error = None;
    }

    pub fn presentation(&self) -> Presentation<'_> {
        match &self.view_state {
            ViewState::Loading => Presentation::Loading,
            ViewState::Failed(message) => Presentation::FullPageError { message },
            ViewState::Empty { dialog_open } => Presentation::Onboarding {
                dialog_open: *dialog_open,
            },
            // A zero-length list still renders as a list: Empty is a semantic
            // state set only by a fetch resolution, not a length check.
            ViewState::Populated { accounts } => Presentation::AccountList { accounts },
        }
    }

    pub fn transient_error(&self) -> Option<&str> {
        self.transient_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use crate::client::services::error::ApiError;

    fn service() -> Arc<AccountService> {
        let config = ClientConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
        };
        Arc::new(AccountService::new(&config))
    }

    fn started() -> (AccountOverview, Arc<AccountService>) {
        let svc = service();
        let mut overview = AccountOverview::new("user-1".to_string());
        let _ = overview.start(&svc);
        (overview, svc)
    }

    fn account(id: &str, name: &str, balance: f64) -> Account {
        Account {
            id: id.to_string(),
            name: name.to_string(),
            balance,
        }
    }

    fn resolve(
        overview: &mut AccountOverview,
        svc: &Arc<AccountService>,
        kind: FetchKind,
        result: Result<Vec<Account>, ApiError>,
    ) {
        let seq = overview.fetch_seq;
        let _ = overview.update(Message::AccountsFetched { seq, kind, result }, svc);
    }

    #[test]
    fn starts_in_loading() {
        let (overview, _svc) = started();
        assert_eq!(overview.view_state, ViewState::Loading);
        assert!(!overview.has_fetched_once);
        assert_eq!(overview.presentation(), Presentation::Loading);
    }

    #[test]
    fn successful_fetch_with_accounts_populates_in_order() {
        let (mut overview, svc) = started();
        let accounts = vec![
            account("1", "Checking", 500.0),
            account("2", "Savings", 0.0),
        ];
        resolve(&mut overview, &svc, FetchKind::Initial, Ok(accounts.clone()));
        assert!(overview.has_fetched_once);
        assert_eq!(
            overview.view_state,
            ViewState::Populated {
                accounts: accounts.clone()
            }
        );
        match overview.presentation() {
            Presentation::AccountList { accounts: rendered } => {
                assert_eq!(rendered, accounts.as_slice());
            }
            other => panic!("expected account list, got {:?}", other),
        }
    }

    #[test]
    fn successful_empty_fetch_lands_in_empty_with_closed_dialog() {
        let (mut overview, svc) = started();
        resolve(&mut overview, &svc, FetchKind::Initial, Ok(vec![]));
        assert!(overview.has_fetched_once);
        assert_eq!(overview.view_state, ViewState::Empty { dialog_open: false });
        assert_eq!(
            overview.presentation(),
            Presentation::Onboarding { dialog_open: false }
        );
    }

    #[test]
    fn initial_fetch_failure_is_blocking() {
        let (mut overview, svc) = started();
        resolve(
            &mut overview,
            &svc,
            FetchKind::Initial,
            Err(ApiError::Status {
                status: 404,
                message: "raw http failure".to_string(),
            }),
        );
        assert_eq!(
            overview.view_state,
            ViewState::Failed("User not found".to_string())
        );
        assert_eq!(overview.transient_error(), None);
        assert_eq!(
            overview.presentation(),
            Presentation::FullPageError {
                message: "User not found"
            }
        );
    }

    #[test]
    fn refetch_failure_preserves_populated_state_and_raises_transient_bar() {
        let (mut overview, svc) = started();
        let accounts = vec![account("1", "Checking", 500.0)];
        resolve(&mut overview, &svc, FetchKind::Initial, Ok(accounts.clone()));

        // simulate a refresh being issued and then failing with a 500
        let _ = overview.issue_fetch(FetchKind::Refetch, &svc);
        resolve(
            &mut overview,
            &svc,
            FetchKind::Refetch,
            Err(ApiError::Status {
                status: 500,
                message: "raw http failure".to_string(),
            }),
        );

        assert_eq!(overview.view_state, ViewState::Populated { accounts });
        assert_eq!(overview.transient_error(), Some("Server error"));

        let _ = overview.update(Message::DismissError { timer_seq: None }, &svc);
        assert_eq!(overview.transient_error(), None);
    }

    #[test]
    fn refetch_failure_arms_a_timed_dismissal_for_its_own_message() {
        let (mut overview, svc) = started();
        resolve(
            &mut overview,
            &svc,
            FetchKind::Initial,
            Ok(vec![account("1", "Checking", 500.0)]),
        );
        let _ = overview.issue_fetch(FetchKind::Refetch, &svc);
        resolve(
            &mut overview,
            &svc,
            FetchKind::Refetch,
            Err(ApiError::Status {
                status: 500,
                message: "raw http failure".to_string(),
            }),
        );
        assert_eq!(overview.transient_seq, 1);

        // The scheduled dismissal carries the bar's duration and the
        // generation of the message it was armed for.
        let (dismiss, delay) = overview.raise_transient_error("Server error".to_string());
        assert_eq!(delay, TRANSIENT_ERROR_TIMEOUT);
        assert!(matches!(
            dismiss,
            Message::DismissError { timer_seq: Some(seq) } if seq == overview.transient_seq
        ));
    }

    #[test]
    fn stale_dismiss_timer_does_not_clear_a_newer_message() {
        let (mut overview, svc) = started();
        resolve(
            &mut overview,
            &svc,
            FetchKind::Initial,
            Ok(vec![account("1", "Checking", 500.0)]),
        );

        // First refresh fails with a 500, its timer is armed for generation 1.
        let _ = overview.issue_fetch(FetchKind::Refetch, &svc);
        resolve(
            &mut overview,
            &svc,
            FetchKind::Refetch,
            Err(ApiError::Status {
                status: 500,
                message: "raw http failure".to_string(),
            }),
        );
        let first_timer = overview.transient_seq;

        // A second refresh fails inside the first timer's window.
        let _ = overview.issue_fetch(FetchKind::Refetch, &svc);
        resolve(
            &mut overview,
            &svc,
            FetchKind::Refetch,
            Err(ApiError::Status {
                status: 404,
                message: "raw http failure".to_string(),
            }),
        );
        assert_eq!(overview.transient_error(), Some("User not found"));

        // The first timer fires; the newer message must survive it.
        let _ = overview.update(
            Message::DismissError {
                timer_seq: Some(first_timer),
            },
            &svc,
        );
        assert_eq!(overview.transient_error(), Some("User not found"));

        // Its own timer clears it, and the dismiss button always would.
        let _ = overview.update(
            Message::DismissError {
                timer_seq: Some(overview.transient_seq),
            },
            &svc,
        );
        assert_eq!(overview.transient_error(), None);
    }

    #[test]
    fn refetch_with_same_collection_is_idempotent() {
        let (mut overview, svc) = started();
        let accounts = vec![
            account("1", "Checking", 500.0),
            account("2", "Savings", 0.0),
        ];
        resolve(&mut overview, &svc, FetchKind::Initial, Ok(accounts.clone()));
        let _ = overview.issue_fetch(FetchKind::Refetch, &svc);
        resolve(&mut overview, &svc, FetchKind::Refetch, Ok(accounts.clone()));
        assert_eq!(overview.view_state, ViewState::Populated { accounts });
    }

    #[test]
    fn dialog_only_opens_from_empty() {
        let (mut overview, svc) = started();
        resolve(
            &mut overview,
            &svc,
            FetchKind::Initial,
            Ok(vec![account("1", "Checking", 500.0)]),
        );
        let _ = overview.update(Message::OpenCreateAccountDialog, &svc);
        assert!(matches!(
            overview.presentation(),
            Presentation::AccountList { .. }
        ));

        let mut failed = AccountOverview::new("user-1".to_string());
        let _ = failed.start(&svc);
        resolve(
            &mut failed,
            &svc,
            FetchKind::Initial,
            Err(ApiError::Network {
                message: "connection refused".to_string(),
            }),
        );
        let _ = failed.update(Message::OpenCreateAccountDialog, &svc);
        assert!(matches!(
            failed.presentation(),
            Presentation::FullPageError { .. }
        ));
    }

    #[test]
    fn create_account_flow_closes_dialog_and_refetches() {
        let (mut overview, svc) = started();
        resolve(&mut overview, &svc, FetchKind::Initial, Ok(vec![]));

        let _ = overview.update(Message::OpenCreateAccountDialog, &svc);
        assert_eq!(overview.view_state, ViewState::Empty { dialog_open: true });

        let _ = overview.update(
            Message::NewAccountNameChanged("Savings".to_string()),
            &svc,
        );
        let _ = overview.update(Message::SubmitCreateAccount, &svc);
        assert!(overview.create_in_flight);

        let seq_before = overview.fetch_seq;
        let _ = overview.update(Message::AccountCreated { result: Ok(()) }, &svc);
        // dialog closed, refetch issued, and no bounce back through Loading
        assert_eq!(overview.view_state, ViewState::Empty { dialog_open: false });
        assert_eq!(overview.fetch_seq, seq_before + 1);

        let created = vec![account("2", "Savings", 0.0)];
        resolve(&mut overview, &svc, FetchKind::Refetch, Ok(created.clone()));
        assert_eq!(overview.view_state, ViewState::Populated { accounts: created });
    }

    #[test]
    fn failed_creation_keeps_dialog_open_with_inline_error() {
        let (mut overview, svc) = started();
        resolve(&mut overview, &svc, FetchKind::Initial, Ok(vec![]));
        let _ = overview.update(Message::OpenCreateAccountDialog, &svc);
        let _ = overview.update(
            Message::NewAccountNameChanged("Savings".to_string()),
            &svc,
        );
        let _ = overview.update(Message::SubmitCreateAccount, &svc);
        let _ = overview.update(
            Message::AccountCreated {
                result: Err(ApiError::Status {
                    status: 500,
                    message: "raw http failure".to_string(),
                }),
            },
            &svc,
        );
        assert_eq!(overview.view_state, ViewState::Empty { dialog_open: true });
        assert_eq!(overview.create_error.as_deref(), Some("Server error"));
    }

    #[test]
    fn stale_resolutions_are_discarded() {
        let (mut overview, svc) = started();
        resolve(&mut overview, &svc, FetchKind::Initial, Ok(vec![]));
        let stale_seq = overview.fetch_seq;

        // a refetch supersedes the earlier request
        let _ = overview.issue_fetch(FetchKind::Refetch, &svc);
        let _ = overview.update(
            Message::AccountsFetched {
                seq: stale_seq,
                kind: FetchKind::Initial,
                result: Err(ApiError::Status {
                    status: 500,
                    message: "raw http failure".to_string(),
                }),
            },
            &svc,
        );
        assert_eq!(overview.view_state, ViewState::Empty { dialog_open: false });
        assert_eq!(overview.transient_error(), None);

        let fresh = vec![account("3", "Joint", 120.5)];
        resolve(&mut overview, &svc, FetchKind::Refetch, Ok(fresh.clone()));
        assert_eq!(overview.view_state, ViewState::Populated { accounts: fresh });
    }

    #[test]
    fn submit_is_ignored_outside_an_open_dialog() {
        let (mut overview, svc) = started();
        resolve(
            &mut overview,
            &svc,
            FetchKind::Initial,
            Ok(vec![account("1", "Checking", 500.0)]),
        );
        let _ = overview.update(
            Message::NewAccountNameChanged("Savings".to_string()),
            &svc,
        );
        let _ = overview.update(Message::SubmitCreateAccount, &svc);
        assert!(!overview.create_in_flight);
    }
}
