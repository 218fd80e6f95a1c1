mod state;
pub mod ui;

pub use state::{App, AppWrapper, NO_ACTIVITY_DATA, NO_COMMIT_DATA, NO_CONTRIBUTORS};
