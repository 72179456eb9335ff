pub mod clock;
pub mod command;
pub mod ledger;
pub mod log;
pub mod scan;
pub mod session;
pub mod shell;

pub use ledger::{ExportOutcome, Ledger, ScanDefaults};
pub use session::{ScanOutcome, Session};
pub use shell::{Flow, SessionShell};
