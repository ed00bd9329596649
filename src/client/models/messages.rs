use crate::client::models::account::Account;
use crate::client::services::error::ApiError;

/// Whether a fetch is the one issued at startup or a later refresh. Failure
/// handling is asymmetric between the two: the initial fetch gates whether
/// there is anything to show at all, a refetch happens over a valid screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Refetch,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Resolution of an account fetch. `seq` identifies the request that
    /// produced it; resolutions of superseded requests are discarded.
    AccountsFetched {
        seq: u64,
        kind: FetchKind,
        result: Result<Vec<Account>, ApiError>,
    },
    // Create-account dialog (only reachable from the empty state)
    OpenCreateAccountDialog,
    CloseCreateAccountDialog,
    NewAccountNameChanged(String),
    SubmitCreateAccount,
    AccountCreated { result: Result<(), ApiError> },
    /// Clears the transient error bar. The dismiss button sends `timer_seq:
    /// None` and always clears; the auto-dismiss timer carries the generation
    /// of the message it was armed for, so a timer that outlived its message
    /// cannot clear a newer one early.
    DismissError { timer_seq: Option<u64> },
    // Navigation
    OpenAccountDetail(String),
    BackToOverview,
}
