use crate::listings::traits::ListingSource;
use crate::models::{Agent, Category, Price, Property, PropertyDetails, PropertyKind};
use chrono::{DateTime, Utc};
use tracing::debug;

const IMAGE_APARTMENT: &str = "https://images.unsplash.com/photo-1663756915301-2ba688e078cf?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMAGE_BUILDING: &str = "https://images.unsplash.com/photo-1756148455703-2b883d5308d5?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMAGE_VILLA: &str = "https://images.unsplash.com/photo-1747752419686-e7f957e1fa18?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// 2025-01-01T00:00:00Z
const LISTING_EPOCH: i64 = 1_735_689_600;

/// In-memory listing collection for Addis Ababa
pub struct MockCatalog {
    listings: Vec<Property>,
    agent: Agent,
}

impl MockCatalog {
    pub fn new() -> Self {
        let listings = mock_addis_properties();
        debug!("📋 Loaded {} mock listings", listings.len());
        Self {
            listings,
            agent: mock_agent(),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingSource for MockCatalog {
    fn listings(&self) -> &[Property] {
        &self.listings
    }

    fn details(&self, id: &str) -> Option<PropertyDetails> {
        let property = self.find(id)?.clone();

        let description = if property.id == "1" {
            "Beautiful modern apartment located in the heart of Bole, one of Addis Ababa's most prestigious neighborhoods. This spacious 2-bedroom unit features contemporary design, high-quality finishes, and stunning city views. Perfect for professionals and expatriates looking for comfort and convenience.".to_string()
        } else {
            format!(
                "{} in {}. {} bedrooms, {} bathrooms, {} m².",
                property.title, property.location, property.bedrooms, property.bathrooms, property.size_sqm
            )
        };

        let mut amenities: Vec<String> = ["High-speed WiFi", "Parking", "24/7 Security"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if property.id == "1" {
            amenities.extend(
                ["Swimming Pool", "Gym Access", "Balcony", "Air Conditioning"]
                    .iter()
                    .map(|s| s.to_string()),
            );
        }
        if property.furnished {
            amenities.push("Furnished".to_string());
        }

        let mut images = vec![property.image_url.clone()];
        images.extend(
            [IMAGE_APARTMENT, IMAGE_BUILDING, IMAGE_VILLA]
                .iter()
                .filter(|url| **url != property.image_url)
                .map(|url| url.to_string()),
        );

        Some(PropertyDetails {
            property,
            description,
            amenities,
            images,
            agent: self.agent.clone(),
        })
    }

    fn source_name(&self) -> &'static str {
        "Mock Addis Ababa"
    }
}

fn listed(days: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(LISTING_EPOCH + days * 86_400, 0).unwrap_or_default()
}

fn mock_agent() -> Agent {
    Agent {
        name: "Sarah Tekle".to_string(),
        rating: 4.8,
        verified: true,
        phone: "+251911234567".to_string(),
        email: "sarah@addisproperty.com".to_string(),
        total_properties: 47,
    }
}

fn mock_addis_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern 2BR Apartment in Bole".to_string(),
            price: Price { etb: 35_000, usd: 650 },
            location: "Bole, Addis Ababa".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            size_sqm: 120,
            image_url: IMAGE_APARTMENT.to_string(),
            verified: true,
            furnished: true,
            saved: false,
            category: Category::Rent,
            kind: PropertyKind::Apartment,
            listed_at: listed(10),
        },
        Property {
            id: "2".to_string(),
            title: "Luxury Villa in Kazanchis".to_string(),
            price: Price {
                etb: 2_500_000,
                usd: 46_500,
            },
            location: "Kazanchis, Addis Ababa".to_string(),
            bedrooms: 4,
            bathrooms: 3,
            size_sqm: 350,
            image_url: IMAGE_VILLA.to_string(),
            verified: true,
            furnished: false,
            saved: true,
            category: Category::Buy,
            kind: PropertyKind::Villa,
            listed_at: listed(3),
        },
        Property {
            id: "3".to_string(),
            title: "3BR Apartment in Piassa".to_string(),
            price: Price { etb: 28_000, usd: 520 },
            location: "Piassa, Addis Ababa".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            size_sqm: 150,
            image_url: IMAGE_BUILDING.to_string(),
            verified: false,
            furnished: true,
            saved: false,
            category: Category::Rent,
            kind: PropertyKind::Apartment,
            listed_at: listed(21),
        },
        Property {
            id: "4".to_string(),
            title: "Spacious 3BR in CMC".to_string(),
            price: Price { etb: 42_000, usd: 780 },
            location: "CMC, Addis Ababa".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            size_sqm: 180,
            image_url: IMAGE_BUILDING.to_string(),
            verified: true,
            furnished: false,
            saved: true,
            category: Category::Rent,
            kind: PropertyKind::Apartment,
            listed_at: listed(14),
        },
        Property {
            id: "5".to_string(),
            title: "Luxury Penthouse Bole Medhanialem".to_string(),
            price: Price {
                etb: 85_000,
                usd: 1_580,
            },
            location: "Bole Medhanialem, Addis Ababa".to_string(),
            bedrooms: 4,
            bathrooms: 3,
            size_sqm: 250,
            image_url: IMAGE_VILLA.to_string(),
            verified: true,
            furnished: true,
            saved: false,
            category: Category::Rent,
            kind: PropertyKind::Condo,
            listed_at: listed(7),
        },
        Property {
            id: "6".to_string(),
            title: "Cozy 1BR Studio Piassa".to_string(),
            price: Price { etb: 18_000, usd: 335 },
            location: "Piassa, Addis Ababa".to_string(),
            bedrooms: 1,
            bathrooms: 1,
            size_sqm: 65,
            image_url: IMAGE_APARTMENT.to_string(),
            verified: false,
            furnished: true,
            saved: false,
            category: Category::Rent,
            kind: PropertyKind::Apartment,
            listed_at: listed(1),
        },
        Property {
            id: "7".to_string(),
            title: "Family House in Kirkos".to_string(),
            price: Price {
                etb: 55_000,
                usd: 1_025,
            },
            location: "Kirkos, Addis Ababa".to_string(),
            bedrooms: 3,
            bathrooms: 3,
            size_sqm: 200,
            image_url: IMAGE_BUILDING.to_string(),
            verified: true,
            furnished: false,
            saved: false,
            category: Category::Rent,
            kind: PropertyKind::House,
            listed_at: listed(28),
        },
    ]
}
