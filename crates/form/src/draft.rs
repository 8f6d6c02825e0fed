use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Default number of decimals offered by the form
pub const DEFAULT_DECIMALS: &str = "6";

/// In-progress token parameters, stored as the raw text the user typed
///
/// Nothing is validated on edit. The only canonicalization is that the symbol
/// is uppercased by its setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    name: String,
    symbol: String,
    decimals: String,
    initial_supply: String,
    supply_cap: String,
    description: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            decimals: DEFAULT_DECIMALS.to_string(),
            initial_supply: String::new(),
            supply_cap: String::new(),
            description: String::new(),
        }
    }
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> &str {
        &self.decimals
    }

    pub fn initial_supply(&self) -> &str {
        &self.initial_supply
    }

    pub fn supply_cap(&self) -> &str {
        &self.supply_cap
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Stores the uppercase transform of `value`
    pub fn set_symbol(&mut self, value: impl AsRef<str>) {
        self.symbol = value.as_ref().to_uppercase();
    }

    pub fn set_decimals(&mut self, value: impl Into<String>) {
        self.decimals = value.into();
    }

    pub fn set_initial_supply(&mut self, value: impl Into<String>) {
        self.initial_supply = value.into();
    }

    pub fn set_supply_cap(&mut self, value: impl Into<String>) {
        self.supply_cap = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Route an edit to the setter of `field`
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.set_name(value),
            Field::Symbol => self.set_symbol(value),
            Field::Decimals => self.set_decimals(value),
            Field::InitialSupply => self.set_initial_supply(value),
            Field::SupplyCap => self.set_supply_cap(value),
            Field::Description => self.set_description(value),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Symbol => &self.symbol,
            Field::Decimals => &self.decimals,
            Field::InitialSupply => &self.initial_supply,
            Field::SupplyCap => &self.supply_cap,
            Field::Description => &self.description,
        }
    }
}
