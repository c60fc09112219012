use crate::app::{App, Notice, NoticeLevel, Screen};
use crate::models::{Currency, Property, PropertyDetails, SearchFilters};

pub fn notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Success => "✅",
        NoticeLevel::Info => "ℹ️ ",
        NoticeLevel::Error => "❌",
    };
    format!("{} {}", marker, notice.message)
}

/// One-paragraph summary of whatever screen is current
pub fn screen(app: &App) -> String {
    let state = app.state();
    let mut header = format!("[{}] tab={}", state.screen, state.tab);
    if state.menu_open {
        header.push_str(" menu=open");
    }
    let mut lines = vec![header];

    match state.screen {
        Screen::Splash => lines.push("Addis Property Rent. Type 'start' to explore.".to_string()),
        Screen::Home => lines.push(format!("{} listings available", app.source().listings().len())),
        Screen::SearchResults => {
            if let Some(filters) = &state.search_filters {
                lines.push(format!("filters: {}", describe_filters(filters)));
            }
            match app.results(Default::default()) {
                Ok(results) => lines.push(listings(app, &results)),
                Err(e) => lines.push(format!("error: {:#}", e)),
            }
        }
        Screen::PropertyDetails => match app.selected_details() {
            Some(d) => lines.push(details(&d)),
            None => lines.push("Property not found".to_string()),
        },
        Screen::SavedListings => {
            let saved = app.saved_listings(None);
            lines.push(format!("{} saved", saved.len()));
            lines.push(listings(app, &saved));
        }
        Screen::ContactAgent => {
            if let Some(d) = app.selected_details() {
                lines.push(format!("Contact {} about '{}'", d.agent.name, d.property.title));
            }
        }
        Screen::UserAccount => lines.push("Signed in. Type 'logout' to sign out.".to_string()),
    }

    lines.join("\n")
}

fn describe_filters(filters: &SearchFilters) -> String {
    if filters.is_unconstrained() {
        return "none".to_string();
    }

    let mut parts = vec![format!(
        "type='{}' beds='{}' price='{}' location='{}'",
        filters.property_type,
        filters.bedrooms,
        filters.price_range,
        filters.location.as_deref().unwrap_or("")
    )];
    match filters.furnished {
        Some(true) => parts.push("furnished".to_string()),
        Some(false) => parts.push("unfurnished".to_string()),
        None => {}
    }
    if filters.verified_only {
        parts.push("verified only".to_string());
    }
    parts.join(" ")
}

pub fn listings(app: &App, listings: &[Property]) -> String {
    if listings.is_empty() {
        return "No properties found".to_string();
    }

    listings
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let heart = if app.is_saved(&p.id) { "♥" } else { " " };
            format!(
                "{}. {} [{}] {} ({})\n   {} bd, {} ba, {} m² · {}",
                i + 1,
                heart,
                p.id,
                p.title,
                p.price.format(Currency::Etb),
                p.bedrooms,
                p.bathrooms,
                p.size_sqm,
                p.location
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn details(details: &PropertyDetails) -> String {
    let p = &details.property;
    [
        format!("{} ({})", p.title, p.location),
        format!(
            "{} / {}",
            p.price.format(Currency::Etb),
            p.price.format(Currency::Usd)
        ),
        details.description.clone(),
        format!("Amenities: {}", details.amenities.join(", ")),
        format!(
            "Agent: {} ⭐ {} · {} properties",
            details.agent.name, details.agent.rating, details.agent.total_properties
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::{ListingSource, MockCatalog};

    #[test]
    fn details_are_one_line_per_section() {
        let catalog = MockCatalog::new();
        let d = catalog.details("1").unwrap();
        let text = details(&d);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("ETB 35,000 / $"));
        assert!(lines[4].starts_with("Agent: Sarah Tekle"));
    }

    #[test]
    fn filter_summary_names_flags() {
        assert_eq!(describe_filters(&SearchFilters::any()), "none");

        let filters = SearchFilters {
            furnished: Some(false),
            verified_only: true,
            ..SearchFilters::of_type("villa")
        };
        assert_eq!(
            describe_filters(&filters),
            "type='villa' beds='' price='' location='' unfurnished verified only"
        );
    }
}
