//! Static catalog contents loaded at startup.

use crate::model::{Category, Dimensions, Manufacturer, Part, PartId};

#[allow(clippy::too_many_arguments)]
fn part(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    stock_quantity: u32,
    category: Category,
    dimensions: Dimensions,
    manufacturer: Manufacturer,
    tags: &[&str],
) -> Part {
    Part {
        id: PartId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        stock_quantity,
        category,
        dimensions: Some(dimensions),
        manufacturer: Some(manufacturer),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn manufacturer(name: &str, country: &str, website: &str) -> Manufacturer {
    Manufacturer {
        name: name.to_string(),
        country: country.to_string(),
        website: website.to_string(),
    }
}

pub fn seed_parts() -> Vec<Part> {
    vec![
        part(
            "part-uuid-1",
            "Ion Engine Model X1",
            "High-efficiency ion engine for deep space missions",
            45000.00,
            5,
            Category::Engine,
            Dimensions {
                length: 120.5,
                width: 80.0,
                height: 120.5,
                weight: 85.0,
            },
            manufacturer("SpaceTech Industries", "USA", "www.spacetech.com"),
            &["engine", "ion", "electric"],
        ),
        part(
            "part-uuid-2",
            "Liquid Hydrogen Tank 500L",
            "Storage tank for liquid hydrogen fuel",
            23000.00,
            12,
            Category::Fuel,
            Dimensions {
                length: 200.0,
                width: 150.0,
                height: 150.0,
                weight: 120.0,
            },
            manufacturer("Hydrogen Systems Ltd", "Germany", "www.hydrogensystems.de"),
            &["fuel", "hydrogen", "tank"],
        ),
        part(
            "part-uuid-3",
            "Observation Window 50cm",
            "Reinforced observation porthole for crew quarters",
            8500.00,
            20,
            Category::Porthole,
            Dimensions {
                length: 50.0,
                width: 50.0,
                height: 10.0,
                weight: 25.0,
            },
            manufacturer("ClearView Space Windows", "Russia", "www.clearview.ru"),
            &["window", "observation", "crew"],
        ),
        part(
            "part-uuid-4",
            "Solar Wing Panel 4m",
            "Solar panel wing for extended missions",
            15000.00,
            8,
            Category::Wing,
            Dimensions {
                length: 400.0,
                width: 200.0,
                height: 5.0,
                weight: 90.0,
            },
            manufacturer("SolarWorks GmbH", "Germany", "www.solarworks.de"),
            &["solar", "wing", "power"],
        ),
    ]
}
