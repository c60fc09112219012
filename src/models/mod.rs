use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a listing is offered for rent or for sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Rent,
    Buy,
}

/// Building type of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    Apartment,
    House,
    Villa,
    Condo,
}

impl PropertyKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" => Some(Self::Apartment),
            "house" => Some(Self::House),
            "villa" => Some(Self::Villa),
            "condo" => Some(Self::Condo),
            _ => None,
        }
    }
}

/// Display currency for prices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Currency {
    #[default]
    Etb,
    Usd,
}

/// Listing price carried in both currencies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub etb: i64,
    pub usd: i64,
}

impl Price {
    pub fn amount(&self, currency: Currency) -> i64 {
        match currency {
            Currency::Etb => self.etb,
            Currency::Usd => self.usd,
        }
    }

    /// "ETB 35,000" or "$650"
    pub fn format(&self, currency: Currency) -> String {
        let grouped = group_thousands(self.amount(currency));
        match currency {
            Currency::Etb => format!("ETB {}", grouped),
            Currency::Usd => format!("${}", grouped),
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: Price,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sqm: u32,
    pub image_url: String,
    pub verified: bool,
    pub furnished: bool,
    pub saved: bool,
    pub category: Category,
    pub kind: PropertyKind,
    pub listed_at: DateTime<Utc>,
}

/// Listing agent shown on the details and contact screens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub name: String,
    pub rating: f32,
    pub verified: bool,
    pub phone: String,
    pub email: String,
    pub total_properties: u32,
}

/// Everything the details screen needs for one listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDetails {
    pub property: Property,
    pub description: String,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub agent: Agent,
}

/// Search form values as entered by the user.
///
/// Every field is optional: an empty string, `None`, or `false` for
/// `verified_only` means no constraint. The raw form values are kept so a
/// stored search compares equal to what was submitted;
/// [`crate::listings::Criteria`] is the parsed form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchFilters {
    pub property_type: String,
    pub bedrooms: String,
    pub price_range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `Some(true)` furnished only, `Some(false)` unfurnished only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished: Option<bool>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verified_only: bool,
}

impl SearchFilters {
    /// The "no constraint" value
    pub fn any() -> Self {
        Self::default()
    }

    pub fn of_type(property_type: &str) -> Self {
        Self {
            property_type: property_type.to_string(),
            ..Self::default()
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.property_type.trim().is_empty()
            && self.bedrooms.trim().is_empty()
            && self.price_range.trim().is_empty()
            && self
                .location
                .as_deref()
                .map_or(true, |l| l.trim().is_empty())
            && self.furnished.is_none()
            && !self.verified_only
    }
}

/// Message the user sends to a listing agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: "Hi, I'm interested in learning more about this property. Please contact me with additional details.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prices_in_both_currencies() {
        let price = Price {
            etb: 2_500_000,
            usd: 46_500,
        };
        assert_eq!(price.format(Currency::Etb), "ETB 2,500,000");
        assert_eq!(price.format(Currency::Usd), "$46,500");

        let small = Price { etb: 650, usd: 12 };
        assert_eq!(small.format(Currency::Etb), "ETB 650");
    }

    #[test]
    fn parses_property_kind_case_insensitively() {
        assert_eq!(PropertyKind::parse("Apartment"), Some(PropertyKind::Apartment));
        assert_eq!(PropertyKind::parse(" villa "), Some(PropertyKind::Villa));
        assert_eq!(PropertyKind::parse("castle"), None);
    }

    #[test]
    fn any_filters_are_unconstrained() {
        assert!(SearchFilters::any().is_unconstrained());
        assert!(!SearchFilters::of_type("house").is_unconstrained());

        let blank_location = SearchFilters {
            location: Some("  ".to_string()),
            ..SearchFilters::any()
        };
        assert!(blank_location.is_unconstrained());

        let verified = SearchFilters {
            verified_only: true,
            ..SearchFilters::any()
        };
        assert!(!verified.is_unconstrained());
        let unfurnished = SearchFilters {
            furnished: Some(false),
            ..SearchFilters::any()
        };
        assert!(!unfurnished.is_unconstrained());
    }

    #[test]
    fn filters_serialize_without_absent_location() {
        let json = serde_json::to_value(SearchFilters::any()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"property_type": "", "bedrooms": "", "price_range": ""})
        );
    }
}
