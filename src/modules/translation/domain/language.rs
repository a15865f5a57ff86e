use std::fmt;
use std::str::FromStr;

/// Languages the translation job accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    Cornish,
    Manx,
    Breton,
    Inuktitut,
    Kalaallisut,
    Romani,
    Occitan,
    Ladino,
    NorthernSami,
    UpperSorbian,
    Kashubian,
    Zazaki,
    Chuvash,
    Livonian,
    Tsakonian,
    Saramaccan,
    Bislama,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("Target language is required")]
    Required,

    #[error("Unsupported language: {0}")]
    Unsupported(String),
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 17] = [
        TargetLanguage::Cornish,
        TargetLanguage::Manx,
        TargetLanguage::Breton,
        TargetLanguage::Inuktitut,
        TargetLanguage::Kalaallisut,
        TargetLanguage::Romani,
        TargetLanguage::Occitan,
        TargetLanguage::Ladino,
        TargetLanguage::NorthernSami,
        TargetLanguage::UpperSorbian,
        TargetLanguage::Kashubian,
        TargetLanguage::Zazaki,
        TargetLanguage::Chuvash,
        TargetLanguage::Livonian,
        TargetLanguage::Tsakonian,
        TargetLanguage::Saramaccan,
        TargetLanguage::Bislama,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Cornish => "cornish",
            TargetLanguage::Manx => "manx",
            TargetLanguage::Breton => "breton",
            TargetLanguage::Inuktitut => "inuktitut",
            TargetLanguage::Kalaallisut => "kalaallisut",
            TargetLanguage::Romani => "romani",
            TargetLanguage::Occitan => "occitan",
            TargetLanguage::Ladino => "ladino",
            TargetLanguage::NorthernSami => "northern_sami",
            TargetLanguage::UpperSorbian => "upper_sorbian",
            TargetLanguage::Kashubian => "kashubian",
            TargetLanguage::Zazaki => "zazaki",
            TargetLanguage::Chuvash => "chuvash",
            TargetLanguage::Livonian => "livonian",
            TargetLanguage::Tsakonian => "tsakonian",
            TargetLanguage::Saramaccan => "saramaccan",
            TargetLanguage::Bislama => "bislama",
        }
    }

    /// Name sent to the model and shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::Cornish => "Cornish",
            TargetLanguage::Manx => "Manx",
            TargetLanguage::Breton => "Breton",
            TargetLanguage::Inuktitut => "Inuktitut",
            TargetLanguage::Kalaallisut => "Kalaallisut",
            TargetLanguage::Romani => "Romani",
            TargetLanguage::Occitan => "Occitan",
            TargetLanguage::Ladino => "Ladino",
            TargetLanguage::NorthernSami => "Northern Sami",
            TargetLanguage::UpperSorbian => "Upper Sorbian",
            TargetLanguage::Kashubian => "Kashubian",
            TargetLanguage::Zazaki => "Zazaki",
            TargetLanguage::Chuvash => "Chuvash",
            TargetLanguage::Livonian => "Livonian",
            TargetLanguage::Tsakonian => "Tsakonian",
            TargetLanguage::Saramaccan => "Saramaccan",
            TargetLanguage::Bislama => "Bislama",
        }
    }

    /// Parse an optional request value; blank counts as missing.
    pub fn parse_requested(raw: Option<&str>) -> Result<Self, LanguageError> {
        match raw.map(str::trim) {
            None | Some("") => Err(LanguageError::Required),
            Some(value) => value.parse(),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TargetLanguage {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| LanguageError::Unsupported(s.to_string()))
    }
}
