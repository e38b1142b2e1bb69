use std::sync::LazyLock;

use fancy_regex::Regex;
use tracing::debug;

use crate::db;
use crate::error::{Error, Result};
use crate::section::Section;
use crate::substitution::expand;
use crate::types::OsInfo;

/// Classifies the platform, operating system and locale of a client from
/// the first section of its User-Agent.
///
/// Only called for clients that were not detected as bots.
pub trait OsClassifier: Send + Sync {
    fn classify(&self, section: &Section) -> OsInfo;
}

const EMBEDDED_OS_RULES: &str = include_str!("../regexes/oss.yml");

static EMBEDDED: LazyLock<OsRules> = LazyLock::new(|| {
    OsRules::from_yaml(EMBEDDED_OS_RULES).expect("embedded regexes/oss.yml must compile")
});

/// `en`, `en-US`, `pt_BR`
static LOCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2}(?:[-_][A-Za-z]{2})?$").expect("static locale pattern must compile")
});

struct OsRule {
    regex: Regex,
    os: String,
    platform: Option<String>,
}

/// Ordered table of OS rules compiled from YAML.
pub struct OsRules {
    rules: Vec<OsRule>,
}

impl OsRules {
    /// Compile a rule table in the `regexes/oss.yml` format.
    pub fn from_yaml(src: &str) -> Result<Self> {
        let entries = db::load_os_entries(src)?;
        let rules = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.regex.is_empty() {
                    return Err(Error::EmptyRegex { index });
                }
                Ok(OsRule {
                    regex: Regex::new(&entry.regex)?,
                    os: entry.os,
                    platform: entry.platform,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(rules = rules.len(), "compiled OS rule table");
        Ok(Self { rules })
    }

    /// The rule table shipped with the crate, compiled on first use.
    pub fn embedded() -> &'static OsRules {
        &EMBEDDED
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Entry-major search: an earlier rule beats an earlier token.
    fn first_match<'a>(
        &'a self,
        comment: &'a [String],
    ) -> Option<(&'a OsRule, fancy_regex::Captures<'a>)> {
        self.rules.iter().find_map(|rule| {
            comment
                .iter()
                .find_map(|token| rule.regex.captures(token).ok().flatten())
                .map(|caps| (rule, caps))
        })
    }
}

impl OsClassifier for OsRules {
    fn classify(&self, section: &Section) -> OsInfo {
        let comment = section.comment.as_slice();
        if comment.is_empty() {
            return OsInfo::default();
        }

        let default_platform = comment
            .iter()
            .find(|token| *token != "compatible")
            .map(String::as_str)
            .unwrap_or_default();

        let (platform, os) = match self.first_match(comment) {
            Some((rule, caps)) => (
                rule.platform
                    .as_deref()
                    .map(|tpl| expand(tpl, &caps).into_owned())
                    .unwrap_or_else(|| default_platform.to_owned()),
                expand(&rule.os, &caps).into_owned(),
            ),
            None => (default_platform.to_owned(), String::new()),
        };

        let localization = comment
            .iter()
            .find(|token| LOCALE.is_match(token).unwrap_or(false))
            .cloned()
            .unwrap_or_default();

        OsInfo {
            platform,
            os,
            localization,
        }
    }
}
