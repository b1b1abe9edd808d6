//! Validated credential types that enforce invariants at construction time

use std::fmt;
use thiserror::Error;

/// Validation errors for credential material
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("username cannot be empty or whitespace")]
    EmptyUsername,

    #[error("password cannot be empty or whitespace")]
    EmptyPassword,
}

/// Macro to generate validated string newtypes.
///
/// Each type gets a `new()` constructor that validates, `as_str()` and
/// `into_inner()` getters, and `AsRef<str>`, `Display`, `TryFrom<String>`
/// impls. `Debug` is implemented per type so secrets can be redacted.
macro_rules! validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(String) {
            error_variant: $error_variant:ident,
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        $vis struct $name(String);

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), " after validation")]
            pub fn new(value: String) -> Result<Self, ValidationError> {
                if value.trim().is_empty() {
                    return Err(ValidationError::$error_variant);
                }
                Ok(Self(value))
            }

            #[doc = concat!("Get the ", stringify!($name), " as a string slice")]
            #[must_use]
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[doc = concat!("Consume the ", stringify!($name), " and return the inner string")]
            #[must_use]
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

validated_string! {
    /// A validated username that cannot be empty or whitespace-only
    ///
    /// # Examples
    /// ```
    /// use nntp_daemon::types::Username;
    ///
    /// let user = Username::new("alice".to_string()).unwrap();
    /// assert_eq!(user.as_str(), "alice");
    ///
    /// assert!(Username::new("".to_string()).is_err());
    /// assert!(Username::new("   ".to_string()).is_err());
    /// ```
    pub struct Username(String) {
        error_variant: EmptyUsername,
    }
}

validated_string! {
    /// A validated password that cannot be empty or whitespace-only
    ///
    /// The `Debug` impl never prints the password itself.
    pub struct Password(String) {
        error_variant: EmptyPassword,
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Username").field(&self.0).finish()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let user = Username::new("alice".to_string()).unwrap();
        assert_eq!(user.as_str(), "alice");
        assert_eq!(user.into_inner(), "alice");
    }

    #[test]
    fn test_username_empty_rejected() {
        let result = Username::new("".to_string());
        assert!(matches!(result, Err(ValidationError::EmptyUsername)));
    }

    #[test]
    fn test_username_whitespace_rejected() {
        for value in ["   ", "\t", "\n", " \t\n "] {
            let result = Username::new(value.to_string());
            assert!(matches!(result, Err(ValidationError::EmptyUsername)));
        }
    }

    #[test]
    fn test_username_display_and_as_ref() {
        let user = Username::new("alice".to_string()).unwrap();
        assert_eq!(format!("{}", user), "alice");
        let s: &str = user.as_ref();
        assert_eq!(s, "alice");
    }

    #[test]
    fn test_username_try_from() {
        let result: Result<Username, _> = "bob".to_string().try_into();
        assert_eq!(result.unwrap().as_str(), "bob");

        let result: Result<Username, _> = "".to_string().try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_password_valid() {
        let pass = Password::new("secret123".to_string()).unwrap();
        assert_eq!(pass.as_str(), "secret123");
    }

    #[test]
    fn test_password_empty_rejected() {
        let result = Password::new("".to_string());
        assert!(matches!(result, Err(ValidationError::EmptyPassword)));
    }

    #[test]
    fn test_password_whitespace_rejected() {
        let result = Password::new("  ".to_string());
        assert!(matches!(result, Err(ValidationError::EmptyPassword)));
    }

    #[test]
    fn test_password_debug_redacted() {
        let pass = Password::new("hunter2".to_string()).unwrap();
        let rendered = format!("{:?}", pass);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn test_username_debug_visible() {
        let user = Username::new("alice".to_string()).unwrap();
        assert!(format!("{:?}", user).contains("alice"));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            format!("{}", ValidationError::EmptyUsername),
            "username cannot be empty or whitespace"
        );
        assert_eq!(
            format!("{}", ValidationError::EmptyPassword),
            "password cannot be empty or whitespace"
        );
    }
}
