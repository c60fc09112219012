use crate::models::{Property, PropertyKind, SearchFilters};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How search results respond to the submitted filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Only listings matching every non-empty filter are shown
    #[default]
    Strict,
    /// Filters are stored but the full result set is always shown
    Cosmetic,
}

/// Result ordering offered on the results screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    PriceLow,
    PriceHigh,
    Newest,
    /// Largest floor area first
    Size,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "newest" => Ok(Self::Newest),
            "size" => Ok(Self::Size),
            other => bail!("unknown sort order '{}'", other),
        }
    }
}

impl SortOrder {
    pub fn sort(&self, listings: &mut [Property]) {
        match self {
            Self::PriceLow => listings.sort_by_key(|p| p.price.etb),
            Self::PriceHigh => listings.sort_by(|a, b| b.price.etb.cmp(&a.price.etb)),
            Self::Newest => listings.sort_by(|a, b| b.listed_at.cmp(&a.listed_at)),
            Self::Size => listings.sort_by(|a, b| b.size_sqm.cmp(&a.size_sqm)),
        }
    }
}

/// Bedroom constraint: "2" is exact, "4+" is a lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bedrooms {
    Exactly(u32),
    AtLeast(u32),
}

impl Bedrooms {
    fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if let Some(min) = value.strip_suffix('+') {
            let min = min
                .trim()
                .parse()
                .with_context(|| format!("invalid bedroom count '{}'", value))?;
            return Ok(Self::AtLeast(min));
        }
        let exact = value
            .parse()
            .with_context(|| format!("invalid bedroom count '{}'", value))?;
        Ok(Self::Exactly(exact))
    }

    fn admits(&self, bedrooms: u32) -> bool {
        match *self {
            Self::Exactly(n) => bedrooms == n,
            Self::AtLeast(n) => bedrooms >= n,
        }
    }
}

/// Price bracket in ETB, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBracket {
    pub min: i64,
    pub max: Option<i64>,
}

impl PriceBracket {
    /// Accepts "20000-40000" and "80000+"
    fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let amount = |s: &str| -> Result<i64> {
            s.trim()
                .replace(',', "")
                .parse::<i64>()
                .with_context(|| format!("invalid price range '{}'", value))
        };

        if let Some(min) = value.strip_suffix('+') {
            return Ok(Self {
                min: amount(min)?,
                max: None,
            });
        }

        let Some((min, max)) = value.split_once('-') else {
            bail!("invalid price range '{}': expected MIN-MAX or MIN+", value);
        };
        let (min, max) = (amount(min)?, amount(max)?);
        if max < min {
            bail!("invalid price range '{}': upper bound below lower bound", value);
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    fn admits(&self, price: i64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// Parsed, typed form of [`SearchFilters`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub kind: Option<PropertyKind>,
    pub bedrooms: Option<Bedrooms>,
    pub price: Option<PriceBracket>,
    /// Lowercased location needle
    pub location: Option<String>,
    pub furnished: Option<bool>,
    pub verified_only: bool,
}

impl Criteria {
    pub fn from_filters(filters: &SearchFilters) -> Result<Self> {
        let kind = match non_empty(&filters.property_type) {
            Some(v) => match PropertyKind::parse(v) {
                Some(kind) => Some(kind),
                None => bail!("unknown property type '{}'", v),
            },
            None => None,
        };

        let bedrooms = non_empty(&filters.bedrooms)
            .map(Bedrooms::parse)
            .transpose()?;

        let price = non_empty(&filters.price_range)
            .map(PriceBracket::parse)
            .transpose()?;

        let location = filters
            .location
            .as_deref()
            .and_then(non_empty)
            .map(str::to_lowercase);

        Ok(Self {
            kind,
            bedrooms,
            price,
            location,
            furnished: filters.furnished,
            verified_only: filters.verified_only,
        })
    }

    /// Conjunction over every constrained field
    pub fn matches(&self, property: &Property) -> bool {
        self.kind.map_or(true, |k| property.kind == k)
            && self.bedrooms.map_or(true, |b| b.admits(property.bedrooms))
            && self.price.map_or(true, |p| p.admits(property.price.etb))
            && self
                .location
                .as_deref()
                .map_or(true, |needle| property.location.to_lowercase().contains(needle))
            && self.furnished.map_or(true, |f| property.furnished == f)
            && (!self.verified_only || property.verified)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
