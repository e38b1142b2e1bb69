use serde::Serialize;

/// Rendering engine and browser product extracted from a User-Agent.
///
/// Every field is empty when the corresponding information could not be
/// recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Browser {
    pub engine: String,
    pub engine_version: String,
    pub name: String,
    pub version: String,
}

impl Browser {
    pub fn engine(&self) -> (&str, &str) {
        (&self.engine, &self.engine_version)
    }

    pub fn product(&self) -> (&str, &str) {
        (&self.name, &self.version)
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
            && self.engine_version.is_empty()
            && self.name.is_empty()
            && self.version.is_empty()
    }
}
