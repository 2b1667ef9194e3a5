/// Session status derived from the stored login flag.
///
/// `LoggedOut` is the initial state. Registration moves to `LoggedIn`,
/// logout moves back. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionStatus {
    pub fn from_flag(is_logged_in: bool) -> Self {
        if is_logged_in {
            SessionStatus::LoggedIn
        } else {
            SessionStatus::LoggedOut
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionStatus::LoggedIn)
    }
}
