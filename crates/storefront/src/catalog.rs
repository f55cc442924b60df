//! Static product catalog.
//!
//! The catalog is the read-only data source for every page: eight sample
//! products across four categories, loaded once and never mutated at
//! runtime. Cart lines snapshot price/name/image from here at add time.

use serde::{Deserialize, Serialize};

use eliteshop_core::{CurrencyCode, Price, ProductId};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Electronics, Self::Clothing, Self::Home, Self::Books];

    /// The URL-friendly identifier (e.g. `electronics`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Home => "home",
            Self::Books => "books",
        }
    }

    /// The human-readable name (e.g. "Clothing & Accessories").
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing & Accessories",
            Self::Home => "Home & Garden",
            Self::Books => "Books",
        }
    }

    /// Parse from the URL-friendly identifier.
    #[must_use]
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Self::Electronics),
            "clothing" => Some(Self::Clothing),
            "home" => Some(Self::Home),
            "books" => Some(Self::Books),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub original_price: Price,
    /// Advertised discount percentage.
    pub discount_percent: u8,
    /// Average rating, 0–5 in half-step granularity.
    pub rating: f32,
    pub review_count: u32,
    /// Image reference (URL).
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
    pub in_stock: bool,
    pub is_new: bool,
    pub is_featured: bool,
}

impl Product {
    /// Star-rating breakdown for display.
    #[must_use]
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// Star-rating breakdown (full / half / empty out of five).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Break a 0–5 rating into full, half, and empty stars.
    #[must_use]
    pub fn from_rating(rating: f32) -> Self {
        let clamped = rating.clamp(0.0, 5.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = clamped.floor() as u8;
        let half = clamped.fract() != 0.0;
        Self {
            full,
            half,
            empty: 5 - full - u8::from(half),
        }
    }
}

/// Category listing entry with its product count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
}

/// The static, read-only list of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_products())
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in a category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Products flagged as featured.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_featured)
    }

    /// Products flagged as new arrivals.
    pub fn new_arrivals(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_new)
    }

    /// Case-insensitive substring search over name, description, and category.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.as_str().contains(&needle)
            })
            .collect()
    }

    /// Per-category product counts, in display order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        Category::ALL
            .iter()
            .map(|&category| CategorySummary {
                category,
                count: self.by_category(category).count(),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i32,
    name: &str,
    category: Category,
    price_cents: i64,
    original_cents: i64,
    discount_percent: u8,
    rating: f32,
    review_count: u32,
    image: &str,
    description: &str,
    features: &[&str],
    is_new: bool,
    is_featured: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        price: Price::from_cents(price_cents, CurrencyCode::USD),
        original_price: Price::from_cents(original_cents, CurrencyCode::USD),
        discount_percent,
        rating,
        review_count,
        image: image.to_owned(),
        description: description.to_owned(),
        features: features.iter().map(|&f| f.to_owned()).collect(),
        in_stock: true,
        is_new,
        is_featured,
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Wireless Bluetooth Headphones",
            Category::Electronics,
            199_99,
            249_99,
            20,
            4.5,
            128,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop",
            "Premium wireless headphones with noise cancellation and 30-hour battery life.",
            &[
                "Active Noise Cancellation",
                "30-hour Battery",
                "Bluetooth 5.0",
                "Comfortable Fit",
            ],
            false,
            true,
        ),
        product(
            2,
            "Smart Fitness Watch",
            Category::Electronics,
            299_99,
            349_99,
            14,
            4.7,
            256,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=300&fit=crop",
            "Advanced fitness tracking with heart rate monitoring and GPS.",
            &[
                "Heart Rate Monitor",
                "GPS Tracking",
                "Water Resistant",
                "7-day Battery",
            ],
            true,
            true,
        ),
        product(
            3,
            "Premium Coffee Maker",
            Category::Home,
            149_99,
            179_99,
            17,
            4.3,
            89,
            "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=400&h=300&fit=crop",
            "Professional-grade coffee maker with programmable brewing and thermal carafe.",
            &[
                "Programmable Timer",
                "Thermal Carafe",
                "12-Cup Capacity",
                "Auto Shut-off",
            ],
            false,
            true,
        ),
        product(
            4,
            "Designer Leather Wallet",
            Category::Clothing,
            79_99,
            99_99,
            20,
            4.6,
            67,
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=300&fit=crop",
            "Handcrafted genuine leather wallet with RFID protection.",
            &[
                "Genuine Leather",
                "RFID Protection",
                "8 Card Slots",
                "Coin Pocket",
            ],
            false,
            true,
        ),
        product(
            5,
            "The Art of Programming",
            Category::Books,
            34_99,
            44_99,
            22,
            4.8,
            203,
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=300&fit=crop",
            "Comprehensive guide to modern programming practices and principles.",
            &[
                "800+ Pages",
                "Code Examples",
                "Best Practices",
                "Updated Edition",
            ],
            false,
            true,
        ),
        product(
            6,
            "Ergonomic Office Chair",
            Category::Home,
            399_99,
            499_99,
            20,
            4.4,
            145,
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop",
            "Adjustable ergonomic chair with lumbar support and breathable mesh.",
            &[
                "Lumbar Support",
                "Adjustable Height",
                "Breathable Mesh",
                "5-Year Warranty",
            ],
            true,
            false,
        ),
        product(
            7,
            "Wireless Charging Pad",
            Category::Electronics,
            29_99,
            39_99,
            25,
            4.2,
            78,
            "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=400&h=300&fit=crop",
            "Fast wireless charging pad compatible with all Qi-enabled devices.",
            &[
                "Qi Compatible",
                "Fast Charging",
                "LED Indicator",
                "Non-slip Surface",
            ],
            false,
            false,
        ),
        product(
            8,
            "Minimalist Watch",
            Category::Clothing,
            159_99,
            199_99,
            20,
            4.5,
            92,
            "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=400&h=300&fit=crop",
            "Classic minimalist watch with Japanese movement and sapphire crystal.",
            &[
                "Japanese Movement",
                "Sapphire Crystal",
                "Stainless Steel",
                "Water Resistant",
            ],
            false,
            false,
        ),
    ]
}
