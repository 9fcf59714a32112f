//! Note tags.
//!
//! Tags categorize a contact's notes (`family`, `work`, `book-club`). The operator
//! types them as one comma-separated line; [`parse_tags`] splits, trims and lower-cases
//! that line and checks every tag with [`validate_tag`]:
//!
//! - letters, digits, underscores (`_`) and hyphens (`-`) only
//! - starts with a letter
//! - no consecutive hyphens, no trailing hyphen

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagValidationError {
    #[error("tag must start with a letter, found '{0}'")]
    InvalidStart(char),
    #[error("tag '{0}' ends with a hyphen")]
    EndsWithHyphen(String),
    #[error("tag '{0}' contains consecutive hyphens")]
    ConsecutiveHyphens(String),
    #[error("tag '{tag}' contains '{ch}' (only letters, digits, '_' and '-' allowed)")]
    InvalidCharacter { tag: String, ch: char },
}

/// Splits a comma-separated line into normalized tags.
///
/// Blank entries are dropped, so an empty line yields an empty list, which the notes
/// record treats as "leave tags unchanged".
///
/// ```
/// use rolodex::tags::parse_tags;
///
/// assert_eq!(parse_tags(" Work, book-club ,,").unwrap(), vec!["work", "book-club"]);
/// assert!(parse_tags("").unwrap().is_empty());
/// assert!(parse_tags("9lives").is_err());
/// ```
pub fn parse_tags(input: &str) -> Result<Vec<String>, TagValidationError> {
    let mut tags: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        validate_tag(&tag)?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Checks a single, already trimmed, non-empty tag.
pub fn validate_tag(tag: &str) -> Result<(), TagValidationError> {
    let mut chars = tag.chars();
    if let Some(first) = chars.next() {
        if !first.is_alphabetic() {
            return Err(TagValidationError::InvalidStart(first));
        }
    }

    let mut prev_was_hyphen = false;
    for ch in tag.chars() {
        if !(ch.is_alphanumeric() || ch == '_' || ch == '-') {
            return Err(TagValidationError::InvalidCharacter {
                tag: tag.to_string(),
                ch,
            });
        }
        if ch == '-' && prev_was_hyphen {
            return Err(TagValidationError::ConsecutiveHyphens(tag.to_string()));
        }
        prev_was_hyphen = ch == '-';
    }

    if prev_was_hyphen {
        return Err(TagValidationError::EndsWithHyphen(tag.to_string()));
    }
    Ok(())
}
