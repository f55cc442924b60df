//! Product listing: filtering, sorting, and page models.

use rust_decimal::Decimal;

use eliteshop_core::ProductId;

use crate::catalog::{Catalog, Category, Product, StarRating};
use crate::store::CartStore;
use crate::views::pagination::Pagination;

/// Products shown per listing page.
pub const PRODUCTS_PER_PAGE: usize = 12;

/// Listing filters. The default shows everything that is in stock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductFilters {
    pub category: Option<Category>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f32>,
    pub in_stock_only: bool,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            category: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            in_stock_only: true,
        }
    }
}

impl ProductFilters {
    fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|c| product.category != c) {
            return false;
        }
        if self.min_price.is_some_and(|min| product.price.amount() < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price.amount() > max) {
            return false;
        }
        if self.min_rating.is_some_and(|min| product.rating < min) {
            return false;
        }
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        true
    }
}

/// Sort comparator for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    /// Highest rating first.
    Rating,
    /// Highest id first (higher id = newer).
    Newest,
}

impl SortKey {
    /// Parse the sort-select parameter value.
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "price" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "rating" => Some(Self::Rating),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }
}

/// Filter the catalog and sort the result.
#[must_use]
pub fn filter_and_sort<'a>(
    catalog: &'a Catalog,
    filters: &ProductFilters,
    sort: SortKey,
) -> Vec<&'a Product> {
    let mut products: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| filters.matches(p))
        .collect();

    match sort {
        SortKey::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => products.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    products
}

/// Product card data for grid and list rendering.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub name: String,
    pub category_label: &'static str,
    pub price: String,
    /// Struck-through price, only when it beats the current price.
    pub original_price: Option<String>,
    /// Badge percentage, only when discounted.
    pub discount_percent: Option<u8>,
    pub stars: StarRating,
    pub review_count: u32,
    pub image: String,
    pub description: String,
    /// First three features, for the list view's tags.
    pub feature_tags: Vec<String>,
    pub is_new: bool,
    pub in_stock: bool,
    pub in_wishlist: bool,
}

impl ProductCardView {
    /// Build a card for one product.
    #[must_use]
    pub fn new(product: &Product, in_wishlist: bool) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            category_label: product.category.display_name(),
            price: product.price.display(),
            original_price: (product.original_price > product.price)
                .then(|| product.original_price.display()),
            discount_percent: (product.discount_percent > 0).then_some(product.discount_percent),
            stars: product.stars(),
            review_count: product.review_count,
            image: product.image.clone(),
            description: product.description.clone(),
            feature_tags: product.features.iter().take(3).cloned().collect(),
            is_new: product.is_new,
            in_stock: product.in_stock,
            in_wishlist,
        }
    }
}

/// One page of the product listing.
#[derive(Debug, Clone)]
pub struct ProductListPage {
    pub heading: &'static str,
    pub products: Vec<ProductCardView>,
    /// Count across all pages, for "Showing N products".
    pub total_count: usize,
    pub pagination: Pagination,
}

/// Build a listing page over the store's catalog and wishlist state.
#[must_use]
pub fn build_page(
    store: &CartStore,
    filters: &ProductFilters,
    sort: SortKey,
    page: u32,
) -> ProductListPage {
    let filtered = filter_and_sort(store.catalog(), filters, sort);
    let pagination = Pagination::new(filtered.len(), PRODUCTS_PER_PAGE, page);

    let products = pagination
        .page_slice(&filtered)
        .iter()
        .map(|product| ProductCardView::new(product, store.is_in_wishlist(product.id)))
        .collect();

    ProductListPage {
        heading: filters
            .category
            .map_or("All Products", |c| c.display_name()),
        products,
        total_count: filtered.len(),
        pagination,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryBackend;

    fn store() -> CartStore {
        CartStore::open(
            Arc::new(Catalog::sample()),
            Arc::new(MemoryBackend::new()),
            Arc::new(RecordingNotifier::new()),
        )
        .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_default_filters_keep_everything_in_stock() {
        let catalog = Catalog::sample();
        let all = filter_and_sort(&catalog, &ProductFilters::default(), SortKey::Newest);
        assert_eq!(all.len(), 8);
        assert_eq!(ids(&all), vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::sample();
        let filters = ProductFilters {
            category: Some(Category::Electronics),
            ..ProductFilters::default()
        };
        let electronics = filter_and_sort(&catalog, &filters, SortKey::PriceAsc);
        assert_eq!(ids(&electronics), vec![7, 1, 2]);
    }

    #[test]
    fn test_price_range_filter() {
        let catalog = Catalog::sample();
        let filters = ProductFilters {
            min_price: Some(Decimal::from(50)),
            max_price: Some(Decimal::from(200)),
            ..ProductFilters::default()
        };
        let mid_range = filter_and_sort(&catalog, &filters, SortKey::PriceAsc);
        // 79.99, 149.99, 159.99, 199.99
        assert_eq!(ids(&mid_range), vec![4, 3, 8, 1]);
    }

    #[test]
    fn test_min_rating_filter() {
        let catalog = Catalog::sample();
        let filters = ProductFilters {
            min_rating: Some(4.6),
            ..ProductFilters::default()
        };
        let top_rated = filter_and_sort(&catalog, &filters, SortKey::Rating);
        assert_eq!(ids(&top_rated), vec![5, 2, 4]);
    }

    #[test]
    fn test_name_sort_both_directions() {
        let catalog = Catalog::sample();
        let asc = filter_and_sort(&catalog, &ProductFilters::default(), SortKey::NameAsc);
        let desc = filter_and_sort(&catalog, &ProductFilters::default(), SortKey::NameDesc);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(ids(&reversed), ids(&desc));
        assert_eq!(asc.first().unwrap().name, "Designer Leather Wallet");
    }

    #[test]
    fn test_sort_param_parsing() {
        assert_eq!(SortKey::from_param("price-desc"), Some(SortKey::PriceDesc));
        assert_eq!(SortKey::from_param("newest"), Some(SortKey::Newest));
        assert_eq!(SortKey::from_param("bogus"), None);
    }

    #[test]
    fn test_build_page_marks_wishlisted_cards() {
        let mut store = store();
        store.toggle_wishlist(ProductId::new(5)).unwrap();

        let page = build_page(&store, &ProductFilters::default(), SortKey::NameAsc, 1);
        assert_eq!(page.heading, "All Products");
        assert_eq!(page.total_count, 8);
        assert_eq!(page.pagination.total_pages, 1);

        let card = page
            .products
            .iter()
            .find(|c| c.product_id == ProductId::new(5))
            .unwrap();
        assert!(card.in_wishlist);
        assert_eq!(card.price, "$34.99");
        assert_eq!(card.original_price.as_deref(), Some("$44.99"));
        assert_eq!(card.discount_percent, Some(22));
    }

    #[test]
    fn test_build_page_heading_follows_category() {
        let store = store();
        let filters = ProductFilters {
            category: Some(Category::Home),
            ..ProductFilters::default()
        };
        let page = build_page(&store, &filters, SortKey::NameAsc, 1);
        assert_eq!(page.heading, "Home & Garden");
        assert_eq!(page.total_count, 2);
    }
}
