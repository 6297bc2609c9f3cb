use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Currency-agnostic amount.
    pub price: f64,
    /// Free-text grouping key used by the storefront filter.
    pub category: String,
    /// URI of the display image. Never dereferenced.
    pub image: String,
    pub in_stock: bool,
}

impl FurnitureItem {
    /// Assemble a stored record from a create request and its assigned id.
    pub fn from_new(id: ItemId, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            image: new.image,
            in_stock: new.in_stock,
        }
    }

    /// Overwrite every field the update supplies. The id is never touched,
    /// whatever `update.id` says.
    pub fn apply(&mut self, update: ItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Create request body: every field of [`FurnitureItem`] except the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub in_stock: bool,
}

/// Update request body.
///
/// `id` selects the record. Absent fields keep their stored value, so a
/// full create-shaped body replaces every mutable field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ItemUpdate {
    /// An update that changes nothing.
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            price: None,
            category: None,
            image: None,
            in_stock: None,
        }
    }

    /// An update replacing every mutable field with `new`'s values.
    pub fn replace_all(id: ItemId, new: NewItem) -> Self {
        Self {
            id,
            name: Some(new.name),
            description: Some(new.description),
            price: Some(new.price),
            category: Some(new.category),
            image: Some(new.image),
            in_stock: Some(new.in_stock),
        }
    }
}
