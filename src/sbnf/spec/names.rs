//! Declaration names
//!
//! The two namespaces are told apart by the lexer, which reads names starting
//! with an uppercase letter as tokens and lowercase as rules. These types only
//! carry the text.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

macro_rules! declaration_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

declaration_name!(
    /// Name of a token declaration, e.g. `NUMBER`.
    TokenName
);

declaration_name!(
    /// Name of a rule declaration, e.g. `expression`.
    RuleName
);
