use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidEmail => write!(f, "Enter a valid email address"),
        }
    }
}

/// Validate one contact-form field. Pure: the outcome depends only on the
/// field and the raw input value.
pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }
    if field == Field::Email && !email_shape_ok(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

// Loose shape check, not RFC parsing: no whitespace, exactly one '@' with a
// non-empty local part, and a '.' splitting the domain into non-empty halves.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match field {
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Message => self.message = error,
        }
    }

    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Validate the whole form for submission. Always evaluates all three
/// fields so the user sees every problem at once, not just the first.
pub fn validate_all(name: &str, email: &str, message: &str) -> FormErrors {
    FormErrors {
        name: validate(Field::Name, name).err(),
        email: validate(Field::Email, email).err(),
        message: validate(Field::Message, message).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_values_are_required() {
        assert_eq!(
            validate(Field::Name, ""),
            Err(FieldError::Required(Field::Name))
        );
        assert_eq!(
            validate(Field::Name, "  "),
            Err(FieldError::Required(Field::Name))
        );
        assert_eq!(
            validate(Field::Message, "\n\t"),
            Err(FieldError::Required(Field::Message))
        );
        assert_eq!(validate(Field::Name, "Mark"), Ok(()));
    }

    #[test]
    fn required_messages_carry_the_field_label() {
        assert_eq!(
            FieldError::Required(Field::Name).to_string(),
            "Name is required"
        );
        assert_eq!(
            FieldError::Required(Field::Email).to_string(),
            "Email is required"
        );
        assert_eq!(
            FieldError::Required(Field::Message).to_string(),
            "Message is required"
        );
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Enter a valid email address"
        );
    }

    #[test]
    fn email_shapes() {
        assert_eq!(validate(Field::Email, "mark@example.com"), Ok(()));
        assert_eq!(validate(Field::Email, "a@b.co.uk"), Ok(()));
        for bad in [
            "mark@example",
            "mark example@x.com",
            "mark@@example.com",
            "@example.com",
            "mark@.com",
            "mark@example.",
            "markexample.com",
        ] {
            assert_eq!(
                validate(Field::Email, bad),
                Err(FieldError::InvalidEmail),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn email_is_trimmed_before_the_shape_check() {
        assert_eq!(validate(Field::Email, "  mark@example.com  "), Ok(()));
    }

    #[test]
    fn submit_valid_form_is_clear() {
        let errors = validate_all("Mark", "mark@example.com", "Hi");
        assert!(errors.is_clear());
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);
    }

    #[test]
    fn submit_reports_every_field_not_just_the_first() {
        let errors = validate_all("", "bad", "");
        assert_eq!(errors.name, Some(FieldError::Required(Field::Name)));
        assert_eq!(errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.message, Some(FieldError::Required(Field::Message)));
        assert!(!errors.is_clear());
    }

    #[test]
    fn revalidation_clears_a_field_error() {
        let mut errors = validate_all("", "bad", "");
        errors.set(Field::Name, validate(Field::Name, "Mark").err());
        assert_eq!(errors.get(Field::Name), None);
        // untouched fields keep their errors
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    }
}
