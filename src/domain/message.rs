use crate::domain::{ValidationError, is_blank};

/// Maximum number of characters in a message body.
pub const MAX_MESSAGE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub posted_by: i32,
    pub text: String,
    pub posted_at: Option<i64>,
}

/// A validated message that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub posted_by: i32,
    pub text: String,
    pub posted_at: Option<i64>,
}

/// Checks that message text is present, not blank and within [`MAX_MESSAGE_LENGTH`].
///
/// # Errors
/// Returns the `ValidationError` for the first rule that fails.
pub fn validate_text(text: Option<String>) -> Result<String, ValidationError> {
    let text = text.ok_or(ValidationError::MissingField("messageText"))?;
    if is_blank(&text) {
        return Err(ValidationError::BlankText);
    }
    if text.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::TextTooLong);
    }
    Ok(text)
}

impl NewMessage {
    /// Validates everything that can be checked without the store.
    /// Whether `posted_by` names a real account is left to the caller.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the text is invalid or the author is missing.
    pub fn parse(text: Option<String>, posted_by: Option<i32>, posted_at: Option<i64>) -> Result<Self, ValidationError> {
        let text = validate_text(text)?;
        let posted_by = posted_by.ok_or(ValidationError::MissingField("postedBy"))?;
        Ok(Self { posted_by, text, posted_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundary() {
        let max = "a".repeat(MAX_MESSAGE_LENGTH);
        assert_eq!(validate_text(Some(max.clone())), Ok(max));

        let over = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert_eq!(validate_text(Some(over)), Err(ValidationError::TextTooLong));
    }

    #[test]
    fn test_multibyte_text_counted_by_character() {
        let text = "é".repeat(MAX_MESSAGE_LENGTH);
        assert!(text.len() > MAX_MESSAGE_LENGTH);
        assert!(validate_text(Some(text)).is_ok());
    }

    #[test]
    fn test_blank_and_missing_text() {
        assert_eq!(validate_text(Some(String::new())), Err(ValidationError::BlankText));
        assert_eq!(validate_text(Some(" \t\n".into())), Err(ValidationError::BlankText));
        assert_eq!(validate_text(None), Err(ValidationError::MissingField("messageText")));
    }

    #[test]
    fn test_parse_requires_author() {
        assert_eq!(
            NewMessage::parse(Some("hello".into()), None, None),
            Err(ValidationError::MissingField("postedBy"))
        );

        let msg = NewMessage::parse(Some("hello".into()), Some(3), Some(1_669_947_792)).unwrap();
        assert_eq!(msg, NewMessage { posted_by: 3, text: "hello".into(), posted_at: Some(1_669_947_792) });
    }

    #[test]
    fn test_text_is_checked_before_author() {
        assert_eq!(NewMessage::parse(Some(" ".into()), None, None), Err(ValidationError::BlankText));
    }
}
