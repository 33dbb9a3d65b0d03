//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! article and category identifiers cannot be mixed up.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Macro to generate lightweight newtypes for source-assigned identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw identifier as stored in the source table.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(ArticleId, "Unique identifier for an article.");
id_newtype!(CategoryId, "Unique identifier for a category.");

/// Raw `inactive` column value. Zero means published, anything else is a draft.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct InactiveFlag(i32);

impl InactiveFlag {
    /// Flag value for a published article.
    pub const ACTIVE: Self = Self(0);
    /// Flag value written when an article is forced into draft.
    pub const INACTIVE: Self = Self(1);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Publication status implied by this flag.
    pub const fn status(self) -> PublicationStatus {
        if self.0 == 0 {
            PublicationStatus::Published
        } else {
            PublicationStatus::Draft
        }
    }
}

impl From<i32> for InactiveFlag {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<InactiveFlag> for i32 {
    fn from(value: InactiveFlag) -> Self {
        value.0
    }
}

/// Status value written into the rendered front matter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Published,
    Draft,
}

impl PublicationStatus {
    /// String representation used in rendered output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

impl Display for PublicationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
