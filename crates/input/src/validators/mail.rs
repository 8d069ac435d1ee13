//! Mail address validator

use crate::filters::mail_error;

crate::validator! {
    /// Validates a mail address.
    ///
    /// Uses the same checks as [`MailFilter`](crate::filters::MailFilter)
    /// without reporting which one failed.
    pub MailValidator;
    rule(input) { mail_error(input.trim()).is_none() }
    fn mail_address();
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::foundation::Validator;

    #[test]
    fn test_mail() {
        assert!(mail_address().validate(&json!("jane@example.com")));
        assert!(!mail_address().validate(&json!("jane@@example.com")));
        assert!(!mail_address().validate(&json!("")));
        assert!(!mail_address().validate(&Value::Null));
    }
}
