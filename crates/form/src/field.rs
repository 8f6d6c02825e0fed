//! Form field identifiers and their presentation metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Inputs of the token-creation form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Symbol,
    Decimals,
    InitialSupply,
    SupplyCap,
    Description,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Symbol,
        Field::Decimals,
        Field::InitialSupply,
        Field::SupplyCap,
        Field::Description,
    ];

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Token Name",
            Field::Symbol => "Token Symbol",
            Field::Decimals => "Decimals (Optional)",
            Field::InitialSupply => "Initial Supply",
            Field::SupplyCap => "Supply Cap (Optional)",
            Field::Description => "Description (Optional)",
        }
    }

    /// Placeholder text for an empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter token name",
            Field::Symbol => "Enter token symbol (e.g. SEI)",
            Field::Decimals => "",
            Field::InitialSupply => "Enter initial supply",
            Field::SupplyCap => "Maximum supply (leave empty for no cap)",
            Field::Description => "Enter token description",
        }
    }

    /// Guidance shown next to the form
    pub fn help(&self) -> &'static str {
        match self {
            Field::Name => {
                "The full name of your token (e.g., \"MyToken\"). This is how users will identify it."
            }
            Field::Symbol => "The short ticker symbol (e.g., \"SEI\"). Up to 8 uppercase letters or digits.",
            Field::Decimals => {
                "Defines how divisible your token is. A value of 6 means a user can hold 0.000001 units. The default value is set to 6."
            }
            Field::InitialSupply => {
                "Total number of tokens that will be minted when the token is created."
            }
            Field::SupplyCap => "Optional upper bound on total issuance. Must not be below the initial supply.",
            Field::Description => "A brief explanation or mission statement for your token.",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Field::Decimals | Field::SupplyCap | Field::Description
        )
    }

    /// Whether the input takes numeric text
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Field::Decimals | Field::InitialSupply | Field::SupplyCap
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "Token name",
            Field::Symbol => "Token symbol",
            Field::Decimals => "Decimals",
            Field::InitialSupply => "Initial supply",
            Field::SupplyCap => "Supply cap",
            Field::Description => "Description",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts snake_case, kebab-case and camelCase spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "name" | "tokenname" => Ok(Field::Name),
            "symbol" | "tokensymbol" => Ok(Field::Symbol),
            "decimals" => Ok(Field::Decimals),
            "initialsupply" | "supply" => Ok(Field::InitialSupply),
            "supplycap" | "cap" => Ok(Field::SupplyCap),
            "description" => Ok(Field::Description),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        assert_eq!("name".parse::<Field>(), Ok(Field::Name));
        assert_eq!("tokenSymbol".parse::<Field>(), Ok(Field::Symbol));
        assert_eq!("initial-supply".parse::<Field>(), Ok(Field::InitialSupply));
        assert_eq!("initial_supply".parse::<Field>(), Ok(Field::InitialSupply));
        assert_eq!("supplyCap".parse::<Field>(), Ok(Field::SupplyCap));
        assert_eq!(
            "colour".parse::<Field>(),
            Err(UnknownField("colour".to_string()))
        );
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<Field> = Field::ALL.iter().copied().filter(Field::is_optional).collect();
        assert_eq!(
            optional,
            vec![Field::Decimals, Field::SupplyCap, Field::Description]
        );
        assert!(Field::InitialSupply.is_numeric());
        assert!(!Field::Symbol.is_numeric());
    }
}
