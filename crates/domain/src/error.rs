#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Invalid fitness level \"{0}\"")]
    InvalidLevel(String),
    #[error("Invalid goal \"{0}\"")]
    InvalidGoal(String),
    #[error("Invalid duration \"{0}\"")]
    InvalidDuration(String),
    #[error("Duration must be 15, 30, 45 or 60 minutes ({0} minutes given)")]
    UnsupportedDuration(u32),
}
