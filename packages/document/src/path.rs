//! Key paths into the document tree.

use std::borrow::Cow;
use std::fmt;

/// One segment of a key path.
///
/// Integer segments address map entries by their decimal string form. The
/// merge never walks *into* sequences: any intermediate that is not a plain
/// map gets coerced to one, so an index used mid-path lands in a map keyed
/// `"0"`, `"1"`, … rather than in an array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    Key(String),
    Index(usize),
}

impl PathKey {
    /// The map key this segment addresses.
    pub fn as_map_key(&self) -> Cow<'_, str> {
        match self {
            PathKey::Key(key) => Cow::Borrowed(key),
            PathKey::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey::Key(key.to_string())
    }
}

impl From<String> for PathKey {
    fn from(key: String) -> Self {
        PathKey::Key(key)
    }
}

impl From<&String> for PathKey {
    fn from(key: &String) -> Self {
        PathKey::Key(key.clone())
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_map_key())
    }
}

/// Build a key path from mixed string/integer segments.
///
/// ```
/// use brandkit_document::path;
///
/// let p = path!["brand", "colors", "primitives", "palette", "blue500"];
/// assert_eq!(p.len(), 5);
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        vec![$($crate::PathKey::from($segment)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_segments_address_map_keys() {
        assert_eq!(PathKey::from(3).as_map_key(), "3");
        assert_eq!(PathKey::from("stops").as_map_key(), "stops");
    }

    #[test]
    fn test_path_macro_mixes_segment_types() {
        let p = path!["brand", "layout", "spacing", 0];
        assert_eq!(p[0], PathKey::Key("brand".to_string()));
        assert_eq!(p[3], PathKey::Index(0));
    }
}
