pub mod activity;
pub mod folder;
pub mod record;
pub mod view_state;

pub use activity::ActivityEntry;
pub use folder::Folder;
pub use record::{AttendanceRecord, RecordOrigin};
pub use view_state::{Dialog, ViewState};
