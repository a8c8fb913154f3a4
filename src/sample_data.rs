//! Seed listings loaded into a fresh catalog when
//! [`CatalogConfig::seed_sample_data`](crate::catalog_state::CatalogConfig) is set.

use chrono::{DateTime, TimeZone, Utc};

use crate::listing_model::{ContactInfo, Listing, ListingType, PropertyType};

fn january_2024(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).single().unwrap_or_default()
}

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/photo-{id}?w=800&h=600&fit=crop")
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn contact(agent: &str, phone: &str, email: &str) -> ContactInfo {
    ContactInfo {
        agent: agent.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

/// The six Seattle-area listings the browser ships with, oldest first.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            price: 750_000.0,
            location: "Downtown, Seattle".to_string(),
            address: "123 Pike Street, Seattle, WA 98101".to_string(),
            bedrooms: 2,
            bathrooms: 2.0,
            sqft: 1200,
            images: vec![
                photo("1560184897-ae75f418493e"),
                photo("1586023492125-27b2c045efd7"),
                photo("1584622650111-993a426fbf0a"),
            ],
            description: "Stunning modern apartment in the heart of downtown Seattle. Features floor-to-ceiling windows, hardwood floors, and premium finishes throughout.".to_string(),
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Sale,
            year_built: Some(2018),
            lot_size: None,
            features: labels(&["Hardwood Floors", "City Views", "In-Unit Laundry", "Gym Access", "Rooftop Deck"]),
            contact_info: contact("Sarah Johnson", "(206) 555-0123", "sarah.johnson@realty.com"),
            created_at: january_2024(15),
            updated_at: january_2024(15),
        },
        Listing {
            id: "2".to_string(),
            title: "Charming Suburban House".to_string(),
            price: 950_000.0,
            location: "Bellevue, WA".to_string(),
            address: "456 Maple Avenue, Bellevue, WA 98004".to_string(),
            bedrooms: 4,
            bathrooms: 3.0,
            sqft: 2800,
            images: vec![
                photo("1518780664697-55e3ad937233"),
                photo("1600596542815-ffad4c1539a9"),
                photo("1600607687939-ce8a6c25118c"),
            ],
            description: "Beautiful family home in prestigious Bellevue neighborhood. Large backyard, updated kitchen, and excellent school district.".to_string(),
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            year_built: Some(2005),
            lot_size: Some(8000),
            features: labels(&["Large Backyard", "Updated Kitchen", "Garage", "Fireplace", "Walk-in Closets"]),
            contact_info: contact("Michael Chen", "(425) 555-0456", "michael.chen@realty.com"),
            created_at: january_2024(16),
            updated_at: january_2024(16),
        },
        Listing {
            id: "3".to_string(),
            title: "Luxury Waterfront Condo".to_string(),
            price: 1_200_000.0,
            location: "Capitol Hill, Seattle".to_string(),
            address: "789 Waterfront Way, Seattle, WA 98102".to_string(),
            bedrooms: 3,
            bathrooms: 2.0,
            sqft: 1800,
            images: vec![
                photo("1512917774080-9991f1c4c750"),
                photo("1570129477492-45c003edd2be"),
                photo("1600566753190-17f0baa2a6c3"),
            ],
            description: "Luxurious waterfront condo with panoramic views of Puget Sound. Premium amenities and prime location in trendy Capitol Hill.".to_string(),
            property_type: PropertyType::Condo,
            listing_type: ListingType::Sale,
            year_built: Some(2020),
            lot_size: None,
            features: labels(&["Water Views", "Concierge", "Roof Deck", "Wine Storage", "Smart Home Tech"]),
            contact_info: contact("Emily Rodriguez", "(206) 555-0789", "emily.rodriguez@realty.com"),
            created_at: january_2024(17),
            updated_at: january_2024(17),
        },
        Listing {
            id: "4".to_string(),
            title: "Cozy Rental Apartment".to_string(),
            price: 2_500.0,
            location: "Fremont, Seattle".to_string(),
            address: "321 Aurora Avenue, Seattle, WA 98103".to_string(),
            bedrooms: 1,
            bathrooms: 1.0,
            sqft: 800,
            images: vec![
                photo("1522708323590-d24dbb6b0267"),
                photo("1586023492125-27b2c045efd7"),
            ],
            description: "Charming studio apartment in vibrant Fremont neighborhood. Perfect for young professionals, close to cafes and shops.".to_string(),
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Rent,
            year_built: Some(2010),
            lot_size: None,
            features: labels(&["Pet Friendly", "Close to Transit", "Exposed Brick", "High Ceilings"]),
            contact_info: contact("David Park", "(206) 555-0321", "david.park@realty.com"),
            created_at: january_2024(18),
            updated_at: january_2024(18),
        },
        Listing {
            id: "5".to_string(),
            title: "Executive Townhouse".to_string(),
            price: 850_000.0,
            location: "Redmond, WA".to_string(),
            address: "654 Tech Boulevard, Redmond, WA 98052".to_string(),
            bedrooms: 3,
            bathrooms: 3.0,
            sqft: 2200,
            images: vec![
                photo("1449844908441-8829872d2607"),
                photo("1600607687939-ce8a6c25118c"),
            ],
            description: "Modern townhouse in tech corridor. Perfect for professionals working in the area, with easy access to major employers.".to_string(),
            property_type: PropertyType::Townhouse,
            listing_type: ListingType::Sale,
            year_built: Some(2015),
            lot_size: None,
            features: labels(&["Attached Garage", "Patio", "Open Floor Plan", "Modern Appliances"]),
            contact_info: contact("Jennifer Liu", "(425) 555-0654", "jennifer.liu@realty.com"),
            created_at: january_2024(19),
            updated_at: january_2024(19),
        },
        Listing {
            id: "6".to_string(),
            title: "Family Home with Pool".to_string(),
            price: 1_100_000.0,
            location: "Kirkland, WA".to_string(),
            address: "987 Lakeview Drive, Kirkland, WA 98033".to_string(),
            bedrooms: 5,
            bathrooms: 4.0,
            sqft: 3500,
            images: vec![
                photo("1600047509807-ba8f99d2cdde"),
                photo("1600596542815-ffad4c1539a9"),
            ],
            description: "Spacious family home with swimming pool and large backyard. Perfect for entertaining and family gatherings.".to_string(),
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            year_built: Some(2008),
            lot_size: Some(12000),
            features: labels(&["Swimming Pool", "Large Deck", "Master Suite", "Home Office", "Storage"]),
            contact_info: contact("Robert Kim", "(425) 555-0987", "robert.kim@realty.com"),
            created_at: january_2024(20),
            updated_at: january_2024(20),
        },
    ]
}
