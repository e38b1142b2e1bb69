use std::borrow::Cow;

use rayon::prelude::*;
use serde::Serialize;
use tracing::trace;

use crate::bot;
use crate::browser_rules;
use crate::os::{OsClassifier, OsRules};
use crate::section::{tokenize, tokenize_bytes, Section};
use crate::types::*;

/// Everything extracted from one User-Agent string.
///
/// A value is produced once per parse and never mutated afterwards, so it
/// can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserAgent {
    raw: String,
    mozilla: String,
    os: OsInfo,
    browser: Browser,
    bot: bool,
    mobile: bool,
}

impl UserAgent {
    /// Parse `ua` using the embedded OS rule table.
    ///
    /// Never fails; unrecognised parts are left as empty strings.
    pub fn parse(ua: &str) -> Self {
        Self::parse_with(ua, OsRules::embedded())
    }

    /// Parse `ua`, delegating platform/OS/locale detection to `os_classifier`.
    pub fn parse_with(ua: &str, os_classifier: &dyn OsClassifier) -> Self {
        let sections = tokenize(ua);
        Self::from_sections(ua, &sections, os_classifier)
    }

    /// Parse raw header bytes; invalid UTF-8 sequences are replaced.
    pub fn parse_bytes(ua: &[u8]) -> Self {
        let raw: Cow<'_, str> = String::from_utf8_lossy(ua);
        let sections = tokenize_bytes(ua);
        Self::from_sections(&raw, &sections, OsRules::embedded())
    }

    fn from_sections(ua: &str, sections: &[Section], os_classifier: &dyn OsClassifier) -> Self {
        let mut parsed = UserAgent {
            raw: ua.to_owned(),
            mobile: sections.iter().any(|s| s.name == "Mobile"),
            ..Default::default()
        };

        let Some(first) = sections.first() else {
            trace!("empty user agent");
            return parsed;
        };
        parsed.mozilla = first.version.clone();

        if bot::is_bot(sections) {
            trace!(sections = sections.len(), "user agent is a bot");
            parsed.bot = true;
            return parsed;
        }

        parsed.browser = browser_rules::classify(ua, sections);
        parsed.os = os_classifier.classify(first);

        trace!(
            sections = sections.len(),
            browser = %parsed.browser.name,
            os = %parsed.os.os,
            mobile = parsed.mobile,
            "parsed user agent"
        );
        parsed
    }

    /// The string this value was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Version of the leading product token, e.g. `5.0` for `Mozilla/5.0`.
    pub fn mozilla(&self) -> &str {
        &self.mozilla
    }

    /// `(engine name, engine version)`
    pub fn engine(&self) -> (&str, &str) {
        self.browser.engine()
    }

    /// `(browser name, browser version)`
    pub fn browser(&self) -> (&str, &str) {
        self.browser.product()
    }

    pub fn browser_info(&self) -> &Browser {
        &self.browser
    }

    pub fn is_bot(&self) -> bool {
        self.bot
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn platform(&self) -> &str {
        &self.os.platform
    }

    pub fn os(&self) -> &str {
        &self.os.os
    }

    pub fn localization(&self) -> &str {
        &self.os.localization
    }

    pub fn os_info(&self) -> &OsInfo {
        &self.os
    }
}

impl From<&str> for UserAgent {
    fn from(ua: &str) -> Self {
        Self::parse(ua)
    }
}

/// Shorthand for [`UserAgent::parse`].
pub fn parse(ua: &str) -> UserAgent {
    UserAgent::parse(ua)
}

/// Parse many User-Agent strings in parallel. Output order matches input order.
pub fn parse_many<S>(uas: &[S]) -> Vec<UserAgent>
where
    S: AsRef<str> + Sync,
{
    uas.par_iter().map(|ua| UserAgent::parse(ua.as_ref())).collect()
}
