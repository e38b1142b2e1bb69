use serde::Deserialize;

// ---------------------------------------------------------------------------
// Operating Systems  (regexes/oss.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct OsEntry {
    pub regex: String,
    pub os: String,
    #[serde(default)]
    pub platform: Option<String>,
}

pub(crate) fn load_os_entries(src: &str) -> crate::Result<Vec<OsEntry>> {
    Ok(serde_yaml::from_str(src)?)
}
