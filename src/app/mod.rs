pub mod action;
pub mod coordinator;
pub mod notice;
pub mod screen;
pub mod state;

pub use action::{Action, InfoAction, MenuItem, QuickAction};
pub use coordinator::App;
pub use notice::{Notice, NoticeLevel};
pub use screen::{Screen, Tab};
