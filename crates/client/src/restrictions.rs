//! Server-declared upload restrictions and the pre-flight validation that
//! runs before any upload request is issued.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::api::ApiError;
use crate::upload::FileUpload;

/// How long a fetched restriction set stays valid before it must be
/// refetched.
pub const RESTRICTIONS_TTL: Duration = Duration::from_secs(10 * 60);

/// Restriction rule kinds the service exposes. Kinds this client does not
/// know yet are preserved as raw strings so validation can fail loudly
/// instead of silently skipping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictionKind {
    MaxFileSize,
    BannedMimeType,
    Other(String),
}

impl RestrictionKind {
    pub fn as_str(&self) -> &str {
        match self {
            RestrictionKind::MaxFileSize => "MAX_FILE_SIZE",
            RestrictionKind::BannedMimeType => "BANNED_MIME_TYPE",
            RestrictionKind::Other(kind) => kind,
        }
    }
}

impl From<String> for RestrictionKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "MAX_FILE_SIZE" => RestrictionKind::MaxFileSize,
            "BANNED_MIME_TYPE" => RestrictionKind::BannedMimeType,
            _ => RestrictionKind::Other(kind),
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RestrictionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RestrictionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(RestrictionKind::from(String::deserialize(deserializer)?))
    }
}

/// A single restriction rule. The value is kept as the wire token's exact
/// string form: numeric for `MAX_FILE_SIZE`, a comma-joined MIME list for
/// `BANNED_MIME_TYPE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    #[serde(rename = "type")]
    pub kind: RestrictionKind,
    #[serde(with = "crate::models::string_or_number")]
    pub value: String,
}

impl Restriction {
    /// Check one candidate upload against this rule.
    pub fn check(&self, upload: &FileUpload) -> Result<(), ApiError> {
        match &self.kind {
            RestrictionKind::MaxFileSize => {
                let max: u64 = self.value.parse().map_err(|_| {
                    ApiError::Deserialization(format!(
                        "invalid MAX_FILE_SIZE value: {}",
                        self.value
                    ))
                })?;
                let Some(size) = upload.content_length()? else {
                    return Ok(());
                };
                if size > max {
                    return Err(ApiError::RestrictionViolated(format!(
                        "file size {} is larger than max allowed {}",
                        size, self.value
                    )));
                }
                Ok(())
            }
            RestrictionKind::BannedMimeType => {
                let Some(mime) = upload.mime_type() else {
                    return Ok(());
                };
                if self.value.split(',').any(|banned| banned == mime) {
                    return Err(ApiError::RestrictionViolated(format!(
                        "file MIME type {} is not allowed for upload",
                        mime
                    )));
                }
                Ok(())
            }
            RestrictionKind::Other(kind) => Err(ApiError::RestrictionNotImplemented(kind.clone())),
        }
    }
}

/// A fetched snapshot of the service's restriction rules.
#[derive(Debug, Clone)]
pub struct RestrictionSet {
    rules: Vec<Restriction>,
    fetched_at: Instant,
}

impl RestrictionSet {
    pub fn new(rules: Vec<Restriction>) -> Self {
        Self {
            rules,
            fetched_at: Instant::now(),
        }
    }

    #[cfg(test)]
    fn fetched_at(rules: Vec<Restriction>, fetched_at: Instant) -> Self {
        Self { rules, fetched_at }
    }

    pub fn rules(&self) -> &[Restriction] {
        &self.rules
    }

    /// A set older than [`RESTRICTIONS_TTL`] must be refetched before use.
    pub fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() >= RESTRICTIONS_TTL
    }

    /// Validate a candidate upload against every rule in order. Remote URL
    /// uploads are exempt from all checks: the client cannot know their size
    /// or type without downloading them, so the server validates on its end.
    pub fn validate(&self, upload: &FileUpload) -> Result<(), ApiError> {
        if upload.is_url() {
            return Ok(());
        }
        for rule in &self.rules {
            rule.check(upload)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_size(value: &str) -> Restriction {
        Restriction {
            kind: RestrictionKind::MaxFileSize,
            value: value.to_string(),
        }
    }

    fn banned_mime(value: &str) -> Restriction {
        Restriction {
            kind: RestrictionKind::BannedMimeType,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_decode_wire_rules() {
        let json = r#"[{"type":"MAX_FILE_SIZE","value":536870912},{"type":"BANNED_MIME_TYPE","value":"application/x-dosexec"}]"#;
        let rules: Vec<Restriction> = serde_json::from_str(json).unwrap();
        assert_eq!(rules[0].kind, RestrictionKind::MaxFileSize);
        assert_eq!(rules[0].value, "536870912");
        assert_eq!(rules[1].kind, RestrictionKind::BannedMimeType);
    }

    #[test]
    fn test_unknown_kind_round_trips() {
        let json = r#"{"type":"MAX_UPLOADS_PER_HOUR","value":10}"#;
        let rule: Restriction = serde_json::from_str(json).unwrap();
        assert_eq!(
            rule.kind,
            RestrictionKind::Other("MAX_UPLOADS_PER_HOUR".to_string())
        );
        let encoded = serde_json::to_string(&rule).unwrap();
        assert_eq!(encoded, r#"{"type":"MAX_UPLOADS_PER_HOUR","value":"10"}"#);
    }

    #[test]
    fn test_buffer_within_max_size_passes() {
        let set = RestrictionSet::new(vec![max_size("100")]);
        let upload = FileUpload::from_buffer(vec![0u8; 100], "test.png");
        assert!(set.validate(&upload).is_ok());
    }

    #[test]
    fn test_buffer_over_max_size_fails() {
        let set = RestrictionSet::new(vec![max_size("100")]);
        let upload = FileUpload::from_buffer(vec![0u8; 101], "test.png");
        let err = set.validate(&upload).unwrap_err();
        assert!(matches!(err, ApiError::RestrictionViolated(_)));
        assert!(err.to_string().contains("101"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_url_uploads_skip_all_checks() {
        let set = RestrictionSet::new(vec![
            max_size("1"),
            banned_mime("image/png"),
            Restriction {
                kind: RestrictionKind::Other("SOMETHING_NEW".to_string()),
                value: "x".to_string(),
            },
        ]);
        let upload = FileUpload::from_target("https://example.com/assets/sunflowers.png");
        assert!(set.validate(&upload).is_ok());
    }

    #[test]
    fn test_banned_mime_type_fails() {
        let set = RestrictionSet::new(vec![banned_mime("application/x-dosexec,image/png")]);
        let upload = FileUpload::from_buffer(vec![], "test.png");
        let err = set.validate(&upload).unwrap_err();
        assert!(err.to_string().contains("image/png"));
    }

    #[test]
    fn test_mime_not_in_denylist_passes() {
        let set = RestrictionSet::new(vec![banned_mime("application/x-dosexec")]);
        let upload = FileUpload::from_buffer(vec![], "test.png");
        assert!(set.validate(&upload).is_ok());
    }

    #[test]
    fn test_unknown_kind_fails_validation() {
        let set = RestrictionSet::new(vec![Restriction {
            kind: RestrictionKind::Other("SOMETHING_NEW".to_string()),
            value: "x".to_string(),
        }]);
        let upload = FileUpload::from_buffer(vec![], "test.png");
        let err = set.validate(&upload).unwrap_err();
        assert!(matches!(err, ApiError::RestrictionNotImplemented(_)));
        assert!(err.to_string().contains("SOMETHING_NEW"));
    }

    #[test]
    fn test_unparseable_max_size_value() {
        let set = RestrictionSet::new(vec![max_size("lots")]);
        let upload = FileUpload::from_buffer(vec![], "test.png");
        assert!(matches!(
            set.validate(&upload).unwrap_err(),
            ApiError::Deserialization(_)
        ));
    }

    #[test]
    fn test_fresh_set_is_not_expired() {
        let set = RestrictionSet::new(vec![]);
        assert!(!set.is_expired());
    }

    #[test]
    fn test_old_set_is_expired() {
        let Some(past) = Instant::now().checked_sub(RESTRICTIONS_TTL + Duration::from_secs(1))
        else {
            return;
        };
        let set = RestrictionSet::fetched_at(vec![], past);
        assert!(set.is_expired());
    }
}
