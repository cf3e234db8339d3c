//! Lexicon blob descriptor types.
//!
//! The PDS acknowledges an upload with a blob descriptor nested under
//! the `blob` key of the response envelope. Two wire forms exist: the
//! current typed form with a `$type` marker and a CID link object, and
//! a legacy flat form still present in old records.

use serde::{Deserialize, Serialize};

/// A reference to a stored blob, as returned by uploadBlob.
///
/// Deserialization accepts both the typed and the legacy wire forms;
/// use the accessors rather than matching on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlobRef {
    /// Current form: `{"$type":"blob","ref":{"$link":...},"mimeType":...,"size":...}`
    Typed(TypedBlobRef),
    /// Legacy form: `{"cid":...,"mimeType":...}`
    Legacy(LegacyBlobRef),
}

impl BlobRef {
    /// Returns the content identifier of the stored blob.
    pub fn cid(&self) -> &str {
        match self {
            BlobRef::Typed(blob) => &blob.r#ref.link,
            BlobRef::Legacy(blob) => &blob.cid,
        }
    }

    /// Returns the declared MIME type.
    pub fn mime_type(&self) -> &str {
        match self {
            BlobRef::Typed(blob) => &blob.mime_type,
            BlobRef::Legacy(blob) => &blob.mime_type,
        }
    }

    /// Returns the stored size in bytes, if the wire form carries one.
    pub fn size(&self) -> Option<u64> {
        match self {
            BlobRef::Typed(blob) => Some(blob.size),
            BlobRef::Legacy(_) => None,
        }
    }
}

/// The typed blob form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedBlobRef {
    /// Always the literal string "blob".
    #[serde(rename = "$type")]
    pub blob_type: String,
    pub r#ref: CidLink,
    pub mime_type: String,
    pub size: u64,
}

/// A CID wrapped in the lexicon link object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidLink {
    #[serde(rename = "$link")]
    pub link: String,
}

/// The legacy flat blob form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBlobRef {
    pub cid: String,
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_typed_form() {
        let value = json!({
            "$type": "blob",
            "ref": {"$link": "bafkreib3i3pzm7yzwk4ea2rsnkmv5uuyg7fmijk6pfliwlxvmnhwkzftfi"},
            "mimeType": "image/png",
            "size": 49503
        });

        let blob: BlobRef = serde_json::from_value(value).unwrap();
        assert_eq!(
            blob.cid(),
            "bafkreib3i3pzm7yzwk4ea2rsnkmv5uuyg7fmijk6pfliwlxvmnhwkzftfi"
        );
        assert_eq!(blob.mime_type(), "image/png");
        assert_eq!(blob.size(), Some(49503));
    }

    #[test]
    fn decodes_legacy_form() {
        let value = json!({
            "cid": "bafkreib3i3pzm7yzwk4ea2rsnkmv5uuyg7fmijk6pfliwlxvmnhwkzftfi",
            "mimeType": "image/jpeg"
        });

        let blob: BlobRef = serde_json::from_value(value).unwrap();
        assert!(matches!(blob, BlobRef::Legacy(_)));
        assert_eq!(blob.mime_type(), "image/jpeg");
        assert_eq!(blob.size(), None);
    }

    #[test]
    fn typed_form_round_trips() {
        let blob = BlobRef::Typed(TypedBlobRef {
            blob_type: "blob".to_string(),
            r#ref: CidLink {
                link: "bafytest".to_string(),
            },
            mime_type: "image/png".to_string(),
            size: 1024,
        });

        let json = serde_json::to_value(&blob).unwrap();
        assert_eq!(json["$type"], "blob");
        assert_eq!(json["ref"]["$link"], "bafytest");

        let back: BlobRef = serde_json::from_value(json).unwrap();
        assert_eq!(back, blob);
    }

    #[test]
    fn rejects_shapeless_object() {
        let value = json!({"unexpected": true});
        assert!(serde_json::from_value::<BlobRef>(value).is_err());
    }
}
