//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use dropship_core::testing::MockNotifier;
//!
//! let notifier = MockNotifier::new();
//! run_once(&config, &notifier).await;
//!
//! let sent = notifier.sent().await;
//! assert_eq!(sent[0].subject, "File copied");
//! ```

mod mock_notifier;

pub use mock_notifier::MockNotifier;
