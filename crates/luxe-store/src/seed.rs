//! The sample catalog a fresh storefront starts with.

use luxe_types::{FurnitureItem, ItemId};

fn entry(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    photo: &str,
) -> FurnitureItem {
    FurnitureItem {
        id: ItemId::new(id),
        name: name.into(),
        description: description.into(),
        price,
        category: category.into(),
        image: format!("https://images.unsplash.com/photo-{photo}?w=800&h=600&fit=crop"),
        in_stock: true,
    }
}

/// Six in-stock items across four categories, with ids `"1"` to `"6"`.
pub fn sample_catalog() -> Vec<FurnitureItem> {
    vec![
        entry(
            "1",
            "Modern Sofa",
            "Elegant 3-seater sofa with premium fabric upholstery",
            1299.0,
            "Living Room",
            "1555041469-a586c61ea9bc",
        ),
        entry(
            "2",
            "Scandinavian Dining Table",
            "Minimalist wooden dining table for 6 people",
            899.0,
            "Dining Room",
            "1617806118233-18e1de247200",
        ),
        entry(
            "3",
            "King Size Bed Frame",
            "Luxurious upholstered bed frame with storage",
            1599.0,
            "Bedroom",
            "1505693416388-ac5ce068fe85",
        ),
        entry(
            "4",
            "Ergonomic Office Chair",
            "Premium mesh back office chair with lumbar support",
            449.0,
            "Office",
            "1580480055273-228ff5388ef8",
        ),
        entry(
            "5",
            "Coffee Table",
            "Contemporary glass-top coffee table",
            349.0,
            "Living Room",
            "1532372320572-cda25653a26d",
        ),
        entry(
            "6",
            "Bookshelf",
            "Modern open bookshelf with 5 shelves",
            279.0,
            "Office",
            "1594620302200-9a762244a156",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_types::categories;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique() {
        let items = sample_catalog();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn sample_covers_four_categories() {
        assert_eq!(
            categories(&sample_catalog()),
            vec!["All", "Living Room", "Dining Room", "Bedroom", "Office"]
        );
    }

    #[test]
    fn sample_is_all_in_stock() {
        assert!(sample_catalog().iter().all(|i| i.in_stock));
    }
}
