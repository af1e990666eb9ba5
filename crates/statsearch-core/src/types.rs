use serde::{Deserialize, Serialize};

/// Identifier stamped on every fetch the controller issues.
///
/// Ids increase monotonically within one [`crate::workflow::SearchState`], so a
/// higher id always means a more recent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(u64);

impl RequestId {
    /// Creates a RequestId from a raw u64 value.
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value of this ID.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One size variant of a result's teaser image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub src: String,
    pub width: u32,
}

/// A single search result as delivered by the endpoint.
///
/// Immutable once received. `identifier` is unique within one response and is
/// used as the render key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub identifier: String,
    pub title: String,
    pub link: String,
    pub date: String,
    pub subject: String,
    pub description: String,
    /// Ordered image variants; only the first one is rendered
    #[serde(rename = "teaser_image_urls", default)]
    pub images: Vec<ImageVariant>,
}

impl ResultItem {
    /// First image variant, if the result carries any.
    pub fn primary_image(&self) -> Option<&ImageVariant> {
        self.images.first()
    }
}

/// Wire envelope: `{ "items": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<ResultItem>,
}
