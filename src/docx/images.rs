//! Image selection among the package media.

/// Which image to read from `word/media/`.
///
/// An exact name wins when it is in the image list; otherwise an in-bounds
/// index is used; otherwise the first image is returned. An unknown name or
/// out-of-range index therefore never fails, it falls back to the first
/// image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageSelector<'a> {
    /// Exact member name, e.g. `word/media/image2.png`.
    pub name: Option<&'a str>,
    /// Zero-based position in the image list.
    pub index: Option<usize>,
}

impl<'a> ImageSelector<'a> {
    /// Select by name, with an index to try when the name is unknown.
    pub fn new(name: &'a str, index: usize) -> Self {
        Self {
            name: Some(name),
            index: Some(index),
        }
    }

    /// Select by exact member name.
    pub fn by_name(name: &'a str) -> Self {
        Self {
            name: Some(name),
            index: None,
        }
    }

    /// Select by position in the image list.
    pub fn by_index(index: usize) -> Self {
        Self {
            name: None,
            index: Some(index),
        }
    }

    /// Pick an image out of `images`. `None` only when the list is empty.
    pub fn resolve<'i>(&self, images: &'i [String]) -> Option<&'i str> {
        let by_name = self
            .name
            .and_then(|name| images.iter().find(|image| image.as_str() == name));
        let by_index = self.index.and_then(|index| images.get(index));

        let chosen = by_name.or(by_index);
        if chosen.is_none() && (self.name.is_some() || self.index.is_some()) {
            log::debug!("image selector {:?} matched nothing, using first image", self);
        }
        chosen.or_else(|| images.first()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Vec<String> {
        vec![
            "word/media/image1.png".to_string(),
            "word/media/image2.jpeg".to_string(),
            "word/media/image3.gif".to_string(),
        ]
    }

    #[test]
    fn test_default_is_first() {
        let images = images();
        assert_eq!(
            ImageSelector::default().resolve(&images),
            Some("word/media/image1.png")
        );
    }

    #[test]
    fn test_name_beats_index() {
        let images = images();
        let selector = ImageSelector::new("word/media/image3.gif", 1);
        assert_eq!(selector.resolve(&images), Some("word/media/image3.gif"));
    }

    #[test]
    fn test_unknown_name_uses_index() {
        let images = images();
        let selector = ImageSelector::new("missing.png", 1);
        assert_eq!(selector.resolve(&images), Some("word/media/image2.jpeg"));
    }

    #[test]
    fn test_invalid_selector_falls_back_to_first() {
        let images = images();
        assert_eq!(
            ImageSelector::new("missing.png", 99).resolve(&images),
            Some("word/media/image1.png")
        );
        assert_eq!(
            ImageSelector::by_index(3).resolve(&images),
            Some("word/media/image1.png")
        );
        assert_eq!(
            ImageSelector::by_name("image2.jpeg").resolve(&images),
            Some("word/media/image1.png")
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(ImageSelector::by_index(0).resolve(&[]), None);
    }
}
