//! Registration form validation.
//!
//! Pure predicates over the raw field strings. These are recomputed on
//! every keystroke, so they take borrowed views and never allocate or
//! fail: a malformed value (e.g. a non-numeric age) is simply invalid.

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw registration field values as typed by the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub repeat_password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub age: &'a str,
}

/// Per-field validity plus the aggregate form validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationValidity {
    pub email: bool,
    pub password: bool,
    pub passwords_match: bool,
    pub first_name: bool,
    pub last_name: bool,
    pub age: bool,
}

impl RegistrationValidity {
    /// True iff every field predicate holds; gates submission.
    pub fn form_valid(&self) -> bool {
        self.email
            && self.password
            && self.passwords_match
            && self.first_name
            && self.last_name
            && self.age
    }
}

/// Checks all registration fields at once.
pub fn check_registration(input: RegistrationInput<'_>) -> RegistrationValidity {
    RegistrationValidity {
        email: email_valid(input.email),
        password: password_valid(input.password),
        passwords_match: passwords_match(input.password, input.repeat_password),
        first_name: name_valid(input.first_name),
        last_name: name_valid(input.last_name),
        age: age_valid(input.age),
    }
}

/// An email is accepted when it is non-blank and contains an `@`.
pub fn email_valid(email: &str) -> bool {
    !is_blank(email) && email.contains('@')
}

/// Passwords must be at least [`MIN_PASSWORD_LEN`] characters.
pub fn password_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// The repeat field must be non-blank and equal to the password.
///
/// Two blank fields do not match: an untouched repeat field must not
/// satisfy the check.
pub fn passwords_match(password: &str, repeat: &str) -> bool {
    !is_blank(repeat) && password == repeat
}

/// Names (first and last) must be non-blank.
pub fn name_valid(name: &str) -> bool {
    !is_blank(name)
}

/// Age must be non-blank and parse as an integer greater than zero.
pub fn age_valid(age: &str) -> bool {
    if is_blank(age) {
        return false;
    }
    age.trim().parse::<i64>().is_ok_and(|n| n > 0)
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_at_sign() {
        assert!(email_valid("a@b.com"));
        assert!(!email_valid("ab.com"));
        assert!(!email_valid(""));
        assert!(!email_valid("   "));
    }

    #[test]
    fn password_requires_six_chars() {
        assert!(!password_valid("12345"));
        assert!(password_valid("123456"));
        // Character count, not byte count.
        assert!(password_valid("pässwö"));
    }

    #[test]
    fn repeat_must_be_non_blank_and_equal() {
        assert!(passwords_match("secret1", "secret1"));
        assert!(!passwords_match("secret1", "secret2"));
        assert!(!passwords_match("", ""));
        assert!(!passwords_match("secret1", ""));
    }

    #[test]
    fn age_parses_as_positive_integer() {
        assert!(age_valid("25"));
        assert!(age_valid(" 25 "));
        assert!(!age_valid("abc"));
        assert!(!age_valid("0"));
        assert!(!age_valid("-5"));
        assert!(!age_valid(""));
        assert!(!age_valid("4.5"));
    }

    #[test]
    fn names_must_be_non_blank() {
        assert!(name_valid("Ada"));
        assert!(!name_valid(""));
        assert!(!name_valid("  "));
    }

    fn valid_input() -> RegistrationInput<'static> {
        RegistrationInput {
            email: "a@b.com",
            password: "123456",
            repeat_password: "123456",
            first_name: "Ada",
            last_name: "Lovelace",
            age: "25",
        }
    }

    #[test]
    fn fully_valid_input_passes() {
        let validity = check_registration(valid_input());
        assert!(validity.form_valid());
    }

    #[test]
    fn form_validity_is_the_conjunction_of_field_predicates() {
        // Break each field in turn; every single failure must sink the form.
        let cases = [
            RegistrationInput {
                email: "ab.com",
                ..valid_input()
            },
            RegistrationInput {
                password: "12345",
                repeat_password: "12345",
                ..valid_input()
            },
            RegistrationInput {
                repeat_password: "1234567",
                ..valid_input()
            },
            RegistrationInput {
                first_name: "",
                ..valid_input()
            },
            RegistrationInput {
                last_name: " ",
                ..valid_input()
            },
            RegistrationInput {
                age: "abc",
                ..valid_input()
            },
        ];

        for input in cases {
            let v = check_registration(input);
            assert!(!v.form_valid(), "expected invalid form for {input:?}");
            let conjunction = v.email
                && v.password
                && v.passwords_match
                && v.first_name
                && v.last_name
                && v.age;
            assert_eq!(v.form_valid(), conjunction);
        }
    }

    #[test]
    fn blank_repeat_password_invalidates_even_when_password_is_blank() {
        let v = check_registration(RegistrationInput {
            password: "",
            repeat_password: "",
            ..valid_input()
        });
        assert!(!v.passwords_match);
        assert!(!v.form_valid());
    }
}
