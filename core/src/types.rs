//! Domain DTOs for the arguments API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// An argument: a conclusion supported by an ordered list of premises.
///
/// A missing `conclusion` deserializes as empty so the local validator, not
/// serde, reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Argument {
    #[serde(default)]
    pub conclusion: String,
    #[serde(default)]
    pub premises: Vec<String>,
}

impl Argument {
    pub fn new<C, P, I>(conclusion: C, premises: I) -> Self
    where
        C: Into<String>,
        P: Into<String>,
        I: IntoIterator<Item = P>,
    {
        Self {
            conclusion: conclusion.into(),
            premises: premises.into_iter().map(Into::into).collect(),
        }
    }
}

/// One element of a conclusion search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentWithId {
    pub id: u64,
    #[serde(flatten)]
    pub argument: Argument,
}

/// Result of `get_all`. A 404 from the server maps to an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentList {
    #[serde(default)]
    pub arguments: Vec<ArgumentWithId>,
}

/// Resource path of a created or updated argument version, taken from the
/// `Location` response header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub location: String,
}

/// Response-side shape of an argument. Unlike `Argument`, both fields are
/// required, so a 200 body that is not an argument fails to decode.
#[derive(Debug, Deserialize)]
pub(crate) struct ArgumentBody {
    conclusion: String,
    premises: Vec<String>,
}

impl From<ArgumentBody> for Argument {
    fn from(body: ArgumentBody) -> Self {
        Self {
            conclusion: body.conclusion,
            premises: body.premises,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArgumentListBody {
    arguments: Vec<ListedArgumentBody>,
}

#[derive(Debug, Deserialize)]
struct ListedArgumentBody {
    id: u64,
    #[serde(flatten)]
    argument: ArgumentBody,
}

impl From<ArgumentListBody> for ArgumentList {
    fn from(body: ArgumentListBody) -> Self {
        Self {
            arguments: body
                .arguments
                .into_iter()
                .map(|listed| ArgumentWithId {
                    id: listed.id,
                    argument: listed.argument.into(),
                })
                .collect(),
        }
    }
}
