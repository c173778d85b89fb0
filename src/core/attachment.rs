//! Attachment validation - gates which files may be filed as bill proof.
//!
//! Only the declared content type is checked. There is no size limit, no content sniffing
//! and no file-name sanitisation beyond stripping a browser path prefix.

use crate::models::Attachment;

/// Content types accepted as bill proof (matched case-sensitively).
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpg", "image/jpeg", "image/png"];

/// Rejection reason reported for any other content type.
pub const WRONG_EXTENSION: &str = "wrong extension";

/// Outcome of validating a proposed attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted { name: String, mime_type: String },
    Rejected { reason: &'static str },
}

impl Validation {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Validates `file` against [`ACCEPTED_MIME_TYPES`].
#[must_use]
pub fn validate(file: &Attachment) -> Validation {
    if ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        Validation::Accepted {
            name: canonical_name(&file.file_name).to_string(),
            mime_type: file.mime_type.clone(),
        }
    } else {
        Validation::Rejected {
            reason: WRONG_EXTENSION,
        }
    }
}

/// Last component of a file path as reported by a browser file input
/// (e.g. `C:\fakepath\Receipt.JPG`), case preserved.
#[must_use]
pub fn canonical_name(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime_type: &str) -> Attachment {
        Attachment::new(name, mime_type, b"test".to_vec())
    }

    #[test]
    fn test_accepts_image_types() {
        for mime_type in ACCEPTED_MIME_TYPES {
            assert_eq!(
                validate(&file("test.jpg", mime_type)),
                Validation::Accepted {
                    name: "test.jpg".to_string(),
                    mime_type: mime_type.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_rejects_other_types() {
        for mime_type in ["document/pdf", "application/pdf", "image/gif", "IMAGE/PNG", ""] {
            assert_eq!(
                validate(&file("test.pdf", mime_type)),
                Validation::Rejected {
                    reason: WRONG_EXTENSION
                },
                "{mime_type} should be rejected"
            );
        }
    }

    #[test]
    fn test_canonical_name_strips_browser_path() {
        assert_eq!(canonical_name("C:\\fakepath\\Receipt.JPG"), "Receipt.JPG");
        assert_eq!(canonical_name("/home/me/scan.png"), "scan.png");
        assert_eq!(canonical_name("plain.jpeg"), "plain.jpeg");
    }
}
