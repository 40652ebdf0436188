/// One announceable item decoded from the feed. Immutable after decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Stable unique identifier carried by the feed.
    pub id: String,
    pub title: String,
    pub link: String,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            link: link.into(),
        }
    }
}
