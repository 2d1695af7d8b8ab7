/// One sport entry shown as a card: a title, a short blurb, and the image
/// label used to look up its glyph in the fixed glyph table.
///
/// A sport has no identity beyond its position in the board's list; two
/// entries with the same fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sport {
    pub title: String,
    pub info: String,
    pub image: String,
}

impl Sport {
    pub fn new(
        title: impl Into<String>,
        info: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            info: info.into(),
            image: image.into(),
        }
    }
}
