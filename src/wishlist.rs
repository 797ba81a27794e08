use chrono::{DateTime, Utc};

use crate::models::{Gift, GiftPreference, WishlistItem};

/// A couple's curated gift list. Gift ids are unique within a wishlist.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, gift_id: &str) -> bool {
        self.items.iter().any(|item| item.gift.id == gift_id)
    }

    pub fn get(&self, gift_id: &str) -> Option<&WishlistItem> {
        self.items.iter().find(|item| item.gift.id == gift_id)
    }

    /// Returns false when the gift was already on the list.
    pub fn add(&mut self, gift: &Gift, preference: GiftPreference, now: DateTime<Utc>) -> bool {
        if self.contains(&gift.id) {
            return false;
        }
        self.items.push(WishlistItem {
            gift: gift.clone(),
            preference,
            added_at: now,
            note: None,
        });
        true
    }

    pub fn remove(&mut self, gift_id: &str) -> bool {
        match self.items.iter().position(|item| item.gift.id == gift_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn update_preference(&mut self, gift_id: &str, preference: GiftPreference) -> bool {
        match self.item_mut(gift_id) {
            Some(item) => {
                item.preference = preference;
                true
            }
            None => false,
        }
    }

    /// A blank note clears the existing one.
    pub fn set_note(&mut self, gift_id: &str, note: Option<String>) -> bool {
        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        match self.item_mut(gift_id) {
            Some(item) => {
                item.note = note;
                true
            }
            None => false,
        }
    }

    /// Sum of gift prices in euro cents.
    pub fn total_value(&self) -> i64 {
        self.items.iter().map(|item| item.gift.price).sum()
    }

    fn item_mut(&mut self, gift_id: &str) -> Option<&mut WishlistItem> {
        self.items.iter_mut().find(|item| item.gift.id == gift_id)
    }
}
