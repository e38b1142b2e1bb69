//! Browser and engine classification.
//!
//! The decision tree is an ordered table of rules. The first rule that
//! recognises the section layout produces the [`Browser`]; the `Edge/`
//! override then runs on top of it unless the rule asked to stop.

use std::sync::LazyLock;

use fancy_regex::Regex;
use tracing::trace;

use crate::section::Section;
use crate::types::Browser;

/// IE11 drops the MSIE token and reports its version as `rv:<version>`.
static IE11_REVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rv:(.+)$").expect("static rv pattern must compile"));

pub(crate) enum Outcome {
    /// Classified; later overrides still apply.
    Classified(Browser),
    /// Classified; nothing else may touch the result.
    Final(Browser),
}

pub(crate) type Rule = fn(&[Section]) -> Option<Outcome>;

/// Evaluated in order, first match wins.
pub(crate) const RULES: &[(&str, Rule)] = &[
    ("legacy opera", legacy_opera),
    ("multi section", multi_section),
    ("compatible msie", compatible_msie),
];

pub(crate) fn classify(ua: &str, sections: &[Section]) -> Browser {
    let mut browser = Browser::default();

    for (name, rule) in RULES {
        match rule(sections) {
            Some(Outcome::Final(found)) => {
                trace!(rule = *name, "browser rule matched, final");
                return found;
            }
            Some(Outcome::Classified(found)) => {
                trace!(rule = *name, "browser rule matched");
                browser = found;
                break;
            }
            None => {}
        }
    }

    edge_override(ua, &mut browser);
    browser
}

/// Edge announces itself with a Chrome-shaped UA plus a trailing `Edge/` token.
pub(crate) fn edge_override(ua: &str, browser: &mut Browser) {
    if ua.contains("Edge/") {
        browser.name = "Microsoft Edge".to_owned();
    }
}

/// `Opera/9.80 (...) Presto/2.x Version/12.x`
pub(crate) fn legacy_opera(sections: &[Section]) -> Option<Outcome> {
    let first = sections.first()?;
    if first.name != "Opera" {
        return None;
    }

    let mut browser = Browser {
        engine: "Presto".to_owned(),
        name: "Opera".to_owned(),
        version: first.version.clone(),
        ..Default::default()
    };
    if let Some(engine) = sections.get(1) {
        browser.engine_version = engine.version.clone();
    }
    // Opera 10+ freezes the leading token at 9.80 and reports the real
    // version in a trailing `Version/` section.
    if let [_, .., last] = sections {
        if last.name == "Version" {
            browser.version = last.version.clone();
        }
    }

    Some(Outcome::Classified(browser))
}

/// `Mozilla/5.0 (...) <Engine>/<v> (...) <Product>/<v> ...`
pub(crate) fn multi_section(sections: &[Section]) -> Option<Outcome> {
    let [first, engine, rest @ ..] = sections else {
        return None;
    };

    let mut browser = Browser {
        engine: engine.name.clone(),
        engine_version: engine.version.clone(),
        ..Default::default()
    };
    let Some(product) = rest.first() else {
        return Some(Outcome::Classified(browser));
    };
    browser.version = product.version.clone();

    match engine.name.as_str() {
        "AppleWebKit" => {
            let last = &sections[sections.len() - 1];
            if last.name == "OPR" {
                browser.name = "Opera".to_owned();
                browser.version = last.version.clone();
            } else if product.name == "Chrome" {
                browser.name = "Chrome".to_owned();
            } else {
                browser.name = "Safari".to_owned();
            }
        }
        "Gecko" => browser.name = product.name.clone(),
        "like" if product.name == "Gecko" => {
            browser.engine = "Trident".to_owned();
            browser.name = "Internet Explorer".to_owned();
            match first.comment.iter().find_map(|token| ie11_revision(token)) {
                Some(version) => {
                    browser.version = version.to_owned();
                    return Some(Outcome::Final(browser));
                }
                None => browser.version.clear(),
            }
        }
        _ => {}
    }

    Some(Outcome::Classified(browser))
}

fn ie11_revision(token: &str) -> Option<&str> {
    let captures = IE11_REVISION.captures(token).ok()??;
    captures.get(1).map(|m| m.as_str())
}

/// `Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)`
pub(crate) fn compatible_msie(sections: &[Section]) -> Option<Outcome> {
    let [only] = sections else {
        return None;
    };
    let [compat, msie, ..] = only.comment.as_slice() else {
        return None;
    };
    if compat != "compatible" || !msie.starts_with("MSIE") {
        return None;
    }

    // Compatibility view reports an older MSIE token; Trident is accurate
    // for IE 8 through 11. Only the first Trident token is considered.
    let mut version = only
        .comment
        .iter()
        .find_map(|token| token.strip_prefix("Trident/"))
        .and_then(msie_for_trident)
        .unwrap_or_default()
        .to_owned();
    if version.is_empty() {
        version = msie["MSIE".len()..].trim().to_owned();
    }

    Some(Outcome::Classified(Browser {
        engine: "Trident".to_owned(),
        engine_version: String::new(),
        name: "Internet Explorer".to_owned(),
        version,
    }))
}

fn msie_for_trident(trident: &str) -> Option<&'static str> {
    match trident {
        "4.0" => Some("8.0"),
        "5.0" => Some("9.0"),
        "6.0" => Some("10.0"),
        "7.0" => Some("11.0"),
        _ => None,
    }
}
