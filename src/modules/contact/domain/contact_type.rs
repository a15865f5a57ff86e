use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Linkedin,
    Github,
    Website,
    Twitter,
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 5] = [
        ContactType::Linkedin,
        ContactType::Github,
        ContactType::Website,
        ContactType::Twitter,
        ContactType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Linkedin => "linkedin",
            ContactType::Github => "github",
            ContactType::Website => "website",
            ContactType::Twitter => "twitter",
            ContactType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactType::Linkedin => "LinkedIn",
            ContactType::Github => "GitHub",
            ContactType::Website => "Website",
            ContactType::Twitter => "Twitter",
            ContactType::Other => "Other",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a valid choice.")]
pub struct InvalidContactType(pub String);

impl FromStr for ContactType {
    type Err = InvalidContactType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidContactType(s.to_string()))
    }
}
