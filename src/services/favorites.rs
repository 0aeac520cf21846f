// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-visitor favorites, held in memory.
//!
//! Visitors are anonymous, so the map is bounded: entries idle longer than
//! the TTL are pruned, and at capacity the least recently touched visitor
//! is evicted. Emptied lists are dropped.

use crate::format::format_utc_rfc3339;
use crate::models::favorite::FavoriteItem;
use chrono::Utc;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Default number of visitors kept in memory.
pub const DEFAULT_MAX_VISITORS: usize = 10_000;

/// Default idle time after which a visitor's favorites are dropped.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

struct VisitorFavorites {
    items: Vec<FavoriteItem>,
    touched: Instant,
}

impl Default for VisitorFavorites {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            touched: Instant::now(),
        }
    }
}

/// Saved listings keyed by visitor id, in the order they were added.
pub struct FavoritesStore {
    by_visitor: DashMap<String, VisitorFavorites>,
    max_visitors: usize,
    idle_ttl: Duration,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_VISITORS, DEFAULT_IDLE_TTL)
    }
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_visitors: usize, idle_ttl: Duration) -> Self {
        Self {
            by_visitor: DashMap::new(),
            max_visitors: max_visitors.max(1),
            idle_ttl,
        }
    }

    pub fn list(&self, visitor: &str) -> Vec<FavoriteItem> {
        self.by_visitor
            .get(visitor)
            .map(|entry| entry.items.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, visitor: &str) -> usize {
        self.by_visitor.get(visitor).map_or(0, |entry| entry.items.len())
    }

    pub fn is_favorite(&self, visitor: &str, id: &str) -> bool {
        self.by_visitor
            .get(visitor)
            .is_some_and(|entry| entry.items.iter().any(|f| f.id == id))
    }

    /// Number of visitors with saved favorites.
    pub fn visitor_count(&self) -> usize {
        self.by_visitor.len()
    }

    /// Save a listing. Returns false if it was already saved.
    pub fn add(&self, visitor: &str, id: &str) -> bool {
        self.make_room_for(visitor);
        let mut entry = self.by_visitor.entry(visitor.to_string()).or_default();
        entry.touched = Instant::now();
        if entry.items.iter().any(|f| f.id == id) {
            return false;
        }
        entry.items.push(new_item(id));
        true
    }

    /// Returns false if the listing was not saved.
    pub fn remove(&self, visitor: &str, id: &str) -> bool {
        let removed = match self.by_visitor.get_mut(visitor) {
            Some(mut entry) => {
                entry.touched = Instant::now();
                let before = entry.items.len();
                entry.items.retain(|f| f.id != id);
                before != entry.items.len()
            }
            None => false,
        };
        self.drop_if_empty(visitor);
        removed
    }

    /// Flip a listing's saved state. Returns whether it is now saved.
    pub fn toggle(&self, visitor: &str, id: &str) -> bool {
        self.make_room_for(visitor);
        let saved = {
            let mut entry = self.by_visitor.entry(visitor.to_string()).or_default();
            entry.touched = Instant::now();
            if let Some(pos) = entry.items.iter().position(|f| f.id == id) {
                entry.items.remove(pos);
                false
            } else {
                entry.items.push(new_item(id));
                true
            }
        };
        if !saved {
            self.drop_if_empty(visitor);
        }
        saved
    }

    pub fn clear(&self, visitor: &str) {
        self.by_visitor.remove(visitor);
    }

    /// Drop visitors idle longer than the TTL. Returns how many were dropped.
    pub fn prune_idle(&self) -> usize {
        let before = self.by_visitor.len();
        self.by_visitor
            .retain(|_, entry| entry.touched.elapsed() < self.idle_ttl);
        before.saturating_sub(self.by_visitor.len())
    }

    /// Called before a write that may create an entry for `visitor`.
    fn make_room_for(&self, visitor: &str) {
        if self.by_visitor.contains_key(visitor) || self.by_visitor.len() < self.max_visitors {
            return;
        }

        let pruned = self.prune_idle();
        if pruned > 0 {
            tracing::debug!(pruned, "Pruned idle favorites");
        }

        while self.by_visitor.len() >= self.max_visitors {
            let oldest = self
                .by_visitor
                .iter()
                .min_by_key(|entry| entry.touched)
                .map(|entry| entry.key().clone());
            match oldest {
                Some(key) => {
                    self.by_visitor.remove(&key);
                }
                None => break,
            }
        }
    }

    fn drop_if_empty(&self, visitor: &str) {
        self.by_visitor
            .remove_if(visitor, |_, entry| entry.items.is_empty());
    }
}

fn new_item(id: &str) -> FavoriteItem {
    FavoriteItem {
        id: id.to_string(),
        added_at: format_utc_rfc3339(Utc::now()),
    }
}
