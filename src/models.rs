//! Frontend Models
//!
//! Data structures matching the food service's JSON.

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::CurrencyFormat;

/// Food data structure (matches service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    #[serde(rename = "image", alias = "imageUrl")]
    pub image_url: String,
    #[serde(deserialize_with = "price_from_text_or_number")]
    pub price: String,
    /// Rendered currency text, never sent to the service
    #[serde(skip)]
    pub price_formatted: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub available: bool,
}

impl Food {
    /// Recompute `price_formatted` from `price`
    pub fn with_formatted_price(mut self, currency: &CurrencyFormat) -> Self {
        self.price_formatted = currency.format_text(&self.price);
        self
    }

    /// Lay the form fields over this food. `id` and `available` are kept.
    pub fn merged_with(&self, input: &FoodInput) -> Food {
        Food {
            name: input.name.clone(),
            image_url: input.image_url.clone(),
            price: input.price.clone(),
            description: input.description.clone(),
            ..self.clone()
        }
    }

    /// Form fields currently held by this food (used to prefill the edit form)
    pub fn to_input(&self) -> FoodInput {
        FoodInput {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }
}

/// Fields collected by the add/edit forms
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodInput {
    pub name: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub price: String,
    pub description: String,
}

/// Body of `POST /foods`
#[derive(Serialize)]
pub struct NewFood<'a> {
    #[serde(flatten)]
    pub input: &'a FoodInput,
    pub available: bool,
}

/// The service stores prices as text but some seeds use plain numbers
fn price_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    })
}
