mod activity;

pub use activity::{recent_daily_activity, DAY_LABELS};
