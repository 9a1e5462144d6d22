use roomie_macros::IntoActiveValue;
use sea_orm::{sea_query::StringLen, DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};

/// Which form produced a lead.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    IntoActiveValue,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(20))",
    rename_all = "lowercase"
)]
#[serde(rename_all = "lowercase")]
pub enum LeadType {
    Roi,
    Contact,
    Consultation,
    Demo,
    Integration,
}

impl LeadType {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roi => "roi",
            Self::Contact => "contact",
            Self::Consultation => "consultation",
            Self::Demo => "demo",
            Self::Integration => "integration",
        }
    }
}

impl Display for LeadType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    IntoActiveValue,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(16))",
    rename_all = "lowercase"
)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// Languages the blog content is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Uk,
    Ru,
    Pl,
}

impl Language {
    /// Parse a language tag such as `uk` or `uk-UA`; unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "uk" | "ua" => Self::Uk,
            "ru" => Self::Ru,
            "pl" => Self::Pl,
            _ => Self::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_are_lenient() {
        assert_eq!(Language::from_tag("uk-UA"), Language::Uk);
        assert_eq!(Language::from_tag("ua"), Language::Uk);
        assert_eq!(Language::from_tag("PL"), Language::Pl);
        assert_eq!(Language::from_tag("de"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn lead_type_wire_names() {
        assert_eq!(serde_json::to_string(&LeadType::Roi).unwrap(), "\"roi\"");
        assert_eq!(LeadType::Demo.to_string(), "demo");
        let parsed: LeadType = serde_json::from_str("\"consultation\"").unwrap();
        assert_eq!(parsed, LeadType::Consultation);
    }
}
