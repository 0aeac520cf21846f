// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod category;
pub mod favorite;
pub mod filters;
pub mod listing;
pub mod newsletter;
pub mod vocab;

pub use category::{Category, CategoryInfo, CATEGORY_INFO};
pub use favorite::FavoriteItem;
pub use filters::{
    BaseCriteria, EatCriteria, FilterAction, FilterCriteria, HikeCriteria, LearnCriteria,
    PlayCriteria, ShopCriteria,
};
pub use listing::{
    BaseListing, Coordinates, EatDetails, HikeDetails, LearnDetails, Listing, ListingDetails,
    PlayDetails, ShopDetails,
};
pub use newsletter::{NewsletterSignup, SubscribeRequest};
