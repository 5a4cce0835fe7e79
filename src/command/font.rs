use std::collections::HashMap;

/// Translates font names into printer font codes
///
/// The builder consults the mapper once per [set_font](crate::LabelBuilder::set_font) call. Names the mapper does not know are sent to the printer untouched, as they are assumed to be printer codes already.
///
/// ```rust
/// # use zpl_rs::{LabelBuilder, Unit};
/// use std::collections::HashMap;
///
/// let mut fonts = HashMap::new();
/// fonts.insert("Swiss 721".to_string(), "0".to_string());
/// let mut builder = LabelBuilder::new(Unit::Dots, 203).unwrap();
/// builder.set_font_mapper(fonts);
/// builder.set_font("Swiss 721", 10.0);
/// assert_eq!("^XA\n^CF0,28\n^XZ\n", builder.to_zpl());
/// ```
pub trait FontMapper {
    fn get(&self, name: &str) -> Option<&str>;
}

impl FontMapper for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(|code| code.as_str())
    }
}

/// Simple lookup table of font names
///
/// ```rust
/// # use zpl_rs::{FontMap, FontMapper};
/// let fonts = FontMap::new()
///     .with_font("Swiss 721", "0")
///     .with_font("OCR-B", "B");
/// assert_eq!(Some("0"), fonts.get("Swiss 721"));
/// assert_eq!(None, fonts.get("A"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FontMap {
    fonts: HashMap<String, String>
}

impl FontMap {
    /// Creates an empty map, every name passes through
    pub fn new() -> FontMap {
        FontMap::default()
    }

    pub fn with_font<A: Into<String>, B: Into<String>>(mut self, name: A, code: B) -> Self {
        self.fonts.insert(name.into(), code.into());
        self
    }

    pub fn insert<A: Into<String>, B: Into<String>>(&mut self, name: A, code: B) {
        self.fonts.insert(name.into(), code.into());
    }
}

impl FontMapper for FontMap {
    fn get(&self, name: &str) -> Option<&str> {
        self.fonts.get(name).map(|code| code.as_str())
    }
}

impl std::iter::FromIterator<(String, String)> for FontMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> FontMap {
        FontMap {
            fonts: iter.into_iter().collect()
        }
    }
}
