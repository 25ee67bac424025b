use unicode_segmentation::UnicodeSegmentation;

const MAX_TITLE_GRAPHEMES: usize = 256;

#[derive(Debug, Clone)]
pub struct NewsTitle(String);

impl NewsTitle {
    pub fn parse(s: String) -> Result<Self, String> {
        let is_blank = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > MAX_TITLE_GRAPHEMES;

        if is_blank || is_too_long {
            Err(format!("{s} is not a valid news title."))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for NewsTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
