pub mod config;
pub mod notify;
pub mod runner;
pub mod selector;
pub mod testing;
pub mod transfer;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, MailConfig,
};
pub use notify::{render, Notification, Notifier, NotifyError, Priority, SendmailNotifier};
pub use runner::{run_once, RunStatus};
pub use selector::{select_latest, CandidateFile, SelectionCriteria, SelectorError};
pub use transfer::{
    destination_path, SourceCleanup, TransferAction, TransferError, TransferOutcome,
    TransferRequest,
};
