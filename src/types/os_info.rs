use serde::Serialize;

/// Platform, operating system and locale taken from the first section's comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OsInfo {
    /// e.g. `Windows`, `Macintosh`, `X11`, `iPhone`.
    pub platform: String,
    /// e.g. `Windows 7`, `Android 4.4`, `iOS 9.1`.
    pub os: String,
    /// e.g. `en-US`.
    pub localization: String,
}
