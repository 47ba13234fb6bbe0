use std::fmt;

/// Which flow the form serves.
///
/// Fixed for the lifetime of a form instance: switching flow mounts a fresh
/// [`super::AuthForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SignUp,
    SignIn,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::SignUp => "sign-up",
            Mode::SignIn => "sign-in",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The form inputs, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
}

pub const FIELDS: [Field; 3] = [Field::Name, Field::Email, Field::Password];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    MinLength(usize),
    EmailFormat,
}

/// A single validation constraint and the message surfaced when it is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    constraint: Constraint,
    message: &'static str,
}

impl Rule {
    fn min_length(len: usize, message: &'static str) -> Self {
        Self {
            constraint: Constraint::MinLength(len),
            message,
        }
    }

    fn email(message: &'static str) -> Self {
        Self {
            constraint: Constraint::EmailFormat,
            message,
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn check(&self, value: &str) -> bool {
        match self.constraint {
            Constraint::MinLength(len) => value.chars().count() >= len,
            Constraint::EmailFormat => email_address::EmailAddress::parse_with_options(
                value,
                email_address::Options::default().with_required_tld(),
            )
            .is_ok(),
        }
    }
}

/// Validation rules of one form instance.
///
/// `name` carries a rule only for [`Mode::SignUp`]; sign-in leaves it
/// unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    name: Option<Rule>,
    email: Rule,
    password: Rule,
}

impl Schema {
    pub fn rule(&self, field: Field) -> Option<&Rule> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
        }
    }

    /// Checks a single field value, returning the violated rule's message.
    pub fn validate(&self, field: Field, value: &str) -> Result<(), &'static str> {
        match self.rule(field) {
            Some(rule) if !rule.check(value) => Err(rule.message()),
            _ => Ok(()),
        }
    }
}

/// Builds the validation rules for the given flow. Pure and deterministic:
/// the same mode always yields an equivalent schema.
pub fn auth_form_schema(mode: Mode) -> Schema {
    Schema {
        name: match mode {
            Mode::SignUp => Some(Rule::min_length(3, "Name must be at least 3 characters")),
            Mode::SignIn => None,
        },
        email: Rule::email("Please enter a valid email address"),
        password: Rule::min_length(8, "Password must be at least 8 characters"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_leaves_name_unconstrained() {
        let schema = auth_form_schema(Mode::SignIn);
        assert!(schema.rule(Field::Name).is_none());
        assert_eq!(schema.validate(Field::Name, ""), Ok(()));
        assert_eq!(schema.validate(Field::Name, "Jo"), Ok(()));
    }

    #[test]
    fn sign_up_constrains_name_length() {
        let schema = auth_form_schema(Mode::SignUp);
        assert_eq!(
            schema.validate(Field::Name, "Jo"),
            Err("Name must be at least 3 characters")
        );
        assert_eq!(schema.validate(Field::Name, "Ada Lovelace"), Ok(()));
    }

    #[test]
    fn email_must_be_a_valid_address() {
        for mode in [Mode::SignUp, Mode::SignIn] {
            let schema = auth_form_schema(mode);
            assert_eq!(
                schema.validate(Field::Email, "not-an-email"),
                Err("Please enter a valid email address")
            );
            // A TLD is required, a bare local domain is not enough.
            assert!(schema.validate(Field::Email, "ada@localhost").is_err());
            assert_eq!(schema.validate(Field::Email, "ada@example.com"), Ok(()));
        }
    }

    #[test]
    fn password_must_be_long_enough() {
        let schema = auth_form_schema(Mode::SignIn);
        assert_eq!(
            schema.validate(Field::Password, "short"),
            Err("Password must be at least 8 characters")
        );
        assert_eq!(schema.validate(Field::Password, "abcdefgh"), Ok(()));
    }

    #[test]
    fn same_mode_yields_an_equivalent_schema() {
        assert_eq!(
            auth_form_schema(Mode::SignUp),
            auth_form_schema(Mode::SignUp)
        );
        assert_eq!(
            auth_form_schema(Mode::SignIn),
            auth_form_schema(Mode::SignIn)
        );
    }
}
