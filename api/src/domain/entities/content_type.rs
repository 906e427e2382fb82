//! Content type domain entity
//!
//! Identifies which kind of content item a view row or SEO report belongs to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of content item tracked by the platform
///
/// Storage keeps the type as free text, so anything outside the recognised
/// set lands in `Other` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentType {
    Post,
    Faq,
    Class,
    Lifelog,
    Other(String),
}

impl ContentType {
    /// Content types every view stats response carries, even when empty
    pub const RECOGNIZED: [ContentType; 4] = [
        ContentType::Post,
        ContentType::Faq,
        ContentType::Class,
        ContentType::Lifelog,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Post => "post",
            ContentType::Faq => "faq",
            ContentType::Class => "class",
            ContentType::Lifelog => "lifelog",
            ContentType::Other(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ContentType::Other(_))
    }
}

/// Exact, case-sensitive match; any other value is kept verbatim in `Other`
impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        match s {
            "post" => ContentType::Post,
            "faq" => ContentType::Faq,
            "class" => ContentType::Class,
            "lifelog" => ContentType::Lifelog,
            other => ContentType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ContentType::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_from_str() {
        assert_eq!(ContentType::from("post"), ContentType::Post);
        assert_eq!(ContentType::from("faq"), ContentType::Faq);
        assert_eq!(ContentType::from("class"), ContentType::Class);
        assert_eq!(ContentType::from("lifelog"), ContentType::Lifelog);
        assert_eq!(
            ContentType::from("podcast"),
            ContentType::Other("podcast".to_string())
        );
    }

    #[test]
    fn unrecognized_values_keep_their_spelling() {
        assert_eq!(ContentType::from("POST"), ContentType::Other("POST".into()));
        assert_ne!(ContentType::from("Video"), ContentType::from("video"));

        for stored in ["Video", "video", "POST", " faq"] {
            assert_eq!(ContentType::from(stored).as_str(), stored);
        }
    }

    #[test]
    fn content_type_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&ContentType::Faq).unwrap(), "\"faq\"");
        assert_eq!(
            serde_json::to_string(&ContentType::Other("video".into())).unwrap(),
            "\"video\""
        );
        let parsed: ContentType = serde_json::from_str("\"lifelog\"").unwrap();
        assert_eq!(parsed, ContentType::Lifelog);
    }

    #[test]
    fn only_other_is_unrecognized() {
        assert!(ContentType::RECOGNIZED.iter().all(|t| t.is_recognized()));
        assert!(!ContentType::Other("x".into()).is_recognized());
    }
}
