//! The static gift catalog couples pick from.

use std::sync::LazyLock;

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Gift, GiftCategory},
};

static CATALOG: LazyLock<Vec<Gift>> = LazyLock::new(|| {
    use GiftCategory::*;
    [
        (
            "k1",
            "Espresso Machine",
            "Dual boiler espresso machine for barista-quality coffee at home",
            64_900,
            Kitchen,
            Some("Sage"),
        ),
        (
            "k2",
            "Cast Iron Casserole",
            "Enamelled 28 cm casserole for slow-cooked family dinners",
            32_900,
            Kitchen,
            Some("Le Creuset"),
        ),
        (
            "k3",
            "Knife Block Set",
            "Seven-piece forged steel knife set with oak block",
            24_950,
            Kitchen,
            Some("Zwilling"),
        ),
        (
            "k4",
            "Stand Mixer",
            "Tilt-head stand mixer with glass bowl and three attachments",
            54_900,
            Kitchen,
            Some("KitchenAid"),
        ),
        (
            "b1",
            "Egyptian Cotton Bedding",
            "King size duvet cover set in 400 thread count cotton",
            18_950,
            Bedroom,
            Some("Auping"),
        ),
        (
            "b2",
            "Bath Towel Collection",
            "Eight heavyweight towels in soft sage green",
            12_900,
            Bedroom,
            None,
        ),
        (
            "b3",
            "Weighted Blanket",
            "Calming 7 kg blanket with a breathable bamboo cover",
            14_900,
            Bedroom,
            None,
        ),
        (
            "l1",
            "Design Floor Lamp",
            "Arched floor lamp with marble base and dimmable light",
            27_900,
            Living,
            Some("Muuto"),
        ),
        (
            "l2",
            "Wool Area Rug",
            "Hand-tufted wool rug, 200 x 300 cm, warm neutral tones",
            39_900,
            Living,
            None,
        ),
        (
            "l3",
            "Photo Frame Gallery Set",
            "Twelve matching oak frames for your wedding memories",
            8_950,
            Living,
            None,
        ),
        (
            "g1",
            "Outdoor Pizza Oven",
            "Gas-fired pizza oven reaching 500 degrees in 15 minutes",
            44_900,
            Garden,
            Some("Ooni"),
        ),
        (
            "g2",
            "Garden Lounge Set",
            "Weatherproof two-seater with cushions and side table",
            89_900,
            Garden,
            None,
        ),
        (
            "e1",
            "Smart Speaker Pair",
            "Two wireless speakers for whole-home audio",
            49_800,
            Electronics,
            Some("Sonos"),
        ),
        (
            "e2",
            "Robot Vacuum",
            "Self-emptying robot vacuum with room mapping",
            59_900,
            Electronics,
            Some("Roborock"),
        ),
        (
            "e3",
            "Instant Camera",
            "Instant film camera for capturing your first year together",
            12_900,
            Electronics,
            Some("Fujifilm"),
        ),
        (
            "x1",
            "Cooking Workshop for Two",
            "Evening masterclass with a Michelin-starred chef",
            19_000,
            Experiences,
            None,
        ),
        (
            "x2",
            "Hot Air Balloon Ride",
            "Sunrise balloon flight over the countryside with champagne",
            45_000,
            Experiences,
            None,
        ),
        (
            "x3",
            "Spa Day for Two",
            "Full-day wellness package including massages and lunch",
            29_900,
            Experiences,
            None,
        ),
        (
            "t1",
            "Honeymoon Flight Contribution",
            "Help us get to our honeymoon destination",
            50_000,
            Travel,
            None,
        ),
        (
            "t2",
            "Romantic Dinner Abroad",
            "A candlelit dinner on our honeymoon",
            15_000,
            Travel,
            None,
        ),
        (
            "t3",
            "Luggage Set",
            "Three-piece hard shell luggage set with spinner wheels",
            34_900,
            Travel,
            Some("Samsonite"),
        ),
        (
            "t4",
            "Snorkelling Excursion",
            "A day of snorkelling on our honeymoon",
            12_000,
            Travel,
            None,
        ),
    ]
    .into_iter()
    .map(|(id, name, description, price, category, brand)| Gift {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        image_url: format!("/images/gifts/{id}.jpg"),
        brand: brand.map(str::to_string),
    })
    .collect()
});

pub fn all() -> &'static [Gift] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static Gift> {
    CATALOG.iter().find(|gift| gift.id == id)
}

/// Category selector from the search bar; `all` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(GiftCategory),
}

impl CategoryFilter {
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Self::All),
            Some(s) if s.eq_ignore_ascii_case("all") => Ok(Self::All),
            Some(s) => s.parse().map(Self::Only).map_err(AppError::BadRequest),
        }
    }

    pub fn accepts(&self, category: GiftCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

/// Case-insensitive substring match on name or description.
pub fn matches_query(gift: &Gift, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || gift.name.to_lowercase().contains(&needle)
        || gift.description.to_lowercase().contains(&needle)
}

pub fn matches(gift: &Gift, query: &str, category: CategoryFilter) -> bool {
    category.accepts(gift.category) && matches_query(gift, query)
}

pub fn filter(query: &str, category: CategoryFilter) -> Vec<&'static Gift> {
    CATALOG
        .iter()
        .filter(|gift| matches(gift, query, category))
        .collect()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryInfo {
    pub id: GiftCategory,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub fn categories() -> Vec<CategoryInfo> {
    GiftCategory::ALL
        .into_iter()
        .map(|id| CategoryInfo {
            id,
            label: id.label(),
            emoji: id.emoji(),
        })
        .collect()
}
