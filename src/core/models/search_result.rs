/// One recorded lead: the source it came from, what was asked, and where to look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub engine: String,
    pub label: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(
        engine: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            engine: engine.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}
