// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Closed vocabularies shared by listings and filter criteria.
//!
//! Every value has a kebab-case wire name (the form used in the JSON data
//! files, Airtable multi-selects and filter actions) and a display label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A wire name that does not belong to the expected vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "binding-generation", derive(TS))]
        #[cfg_attr(
            feature = "binding-generation",
            ts(export, export_to = "web/src/lib/generated/")
        )]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownValue {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Age bracket a listing is suitable for.
    AgeRange {
        Baby => "baby", "Baby";
        Toddler => "toddler", "Toddler";
        Preschool => "preschool", "Preschool";
        Elementary => "elementary", "Elementary";
        Tween => "tween", "Tween";
    }
}

impl AgeRange {
    /// Age span shown next to the bracket name.
    pub fn years(self) -> &'static str {
        match self {
            AgeRange::Baby => "0-1 years",
            AgeRange::Toddler => "1-3 years",
            AgeRange::Preschool => "3-5 years",
            AgeRange::Elementary => "5-12 years",
            AgeRange::Tween => "10-14 years",
        }
    }
}

vocabulary! {
    Weather {
        Sunny => "sunny", "Sunny Days";
        Rainy => "rainy", "Rainy Days";
        Snowy => "snowy", "Snow Days";
        Cold => "cold", "Cold Weather";
    }
}

vocabulary! {
    Amenity {
        Restrooms => "restrooms", "Restrooms";
        ChangingTables => "changing-tables", "Changing Tables";
        Parking => "parking", "Parking";
        DogFriendly => "dog-friendly", "Dog Friendly";
    }
}

vocabulary! {
    Accessibility {
        Wheelchair => "wheelchair", "Wheelchair Accessible";
        Stroller => "stroller", "Stroller Friendly";
    }
}

vocabulary! {
    /// Indoor/outdoor setting. `Both` venues satisfy either specific request.
    Setting {
        Indoor => "indoor", "Indoor";
        Outdoor => "outdoor", "Outdoor";
        Both => "both", "Indoor & Outdoor";
    }
}

vocabulary! {
    ShadeCoverage {
        None => "none", "No Shade";
        Partial => "partial", "Partial Shade";
        Full => "full", "Full Shade";
    }
}

vocabulary! {
    PriceRange {
        Free => "free", "Free";
        Budget => "$", "$";
        Moderate => "$$", "$$";
        Premium => "$$$", "$$$";
    }
}

vocabulary! {
    Difficulty {
        Easy => "easy", "Easy";
        Moderate => "moderate", "Moderate";
        Hard => "hard", "Hard";
    }
}

vocabulary! {
    Surface {
        Paved => "paved", "Paved";
        Gravel => "gravel", "Gravel";
        Dirt => "dirt", "Dirt";
        Rocky => "rocky", "Rocky";
        Mixed => "mixed", "Mixed";
    }
}

vocabulary! {
    HikeType {
        Loop => "loop", "Loop";
        OutAndBack => "out-and-back", "Out and Back";
    }
}

vocabulary! {
    HikeFeature {
        View => "view", "View";
        Waterfall => "waterfall", "Waterfall";
        Lake => "lake", "Lake";
        Pond => "pond", "Pond";
        Wildlife => "wildlife", "Wildlife";
        RockFormations => "rock-formations", "Rock Formations";
    }
}

vocabulary! {
    MealType {
        Breakfast => "breakfast", "Breakfast";
        Lunch => "lunch", "Lunch";
        Dinner => "dinner", "Dinner";
        Brunch => "brunch", "Brunch";
        Drinks => "drinks", "Drinks";
        Bakery => "bakery", "Bakery";
        Cafe => "cafe", "Café";
        HappyHour => "happy-hour", "Happy Hour";
    }
}

vocabulary! {
    EatFeature {
        KidsMenu => "kids-menu", "Kids Menu";
        HighChairs => "high-chairs", "High Chairs";
        OutdoorSeating => "outdoor-seating", "Outdoor Seating";
        Coloring => "coloring", "Coloring";
        PlayArea => "play-area", "Play Area";
        QuickService => "quick-service", "Quick Service";
        Reservations => "reservations", "Reservations";
        Entertainment => "entertainment", "Entertainment";
    }
}

vocabulary! {
    NoiseLevel {
        Quiet => "quiet", "Quiet";
        Moderate => "moderate", "Moderate";
        Loud => "loud", "Loud";
    }
}

vocabulary! {
    PlayType {
        Playground => "playground", "Playground";
        Arcade => "arcade", "Arcade";
        OpenSpace => "open-space", "Open Space";
        IceRink => "ice-rink", "Ice Rink";
        Pool => "pool", "Pool";
        SnowSports => "snow-sports", "Snow Sports";
        Aerial => "aerial", "Aerial";
        Bowling => "bowling", "Bowling";
        Gardens => "gardens", "Gardens";
    }
}

vocabulary! {
    PlayFeature {
        Court => "court", "Court";
        Field => "field", "Field";
        SplashPad => "splash-pad", "Splash Pad";
        SkatePark => "skate-park", "Skate Park";
        DiscGolf => "disc-golf", "Disc Golf";
        IceRink => "ice-rink", "Ice Rink";
        Pool => "pool", "Pool";
        Golf => "golf", "Golf";
        BikeCourse => "bike-course", "Bike Course";
        Sledding => "sledding", "Sledding";
        DownhillSkiing => "downhill-skiing", "Downhill Skiing";
        Snowboarding => "snowboarding", "Snowboarding";
        CrossCountrySkiing => "cross-country-skiing", "Cross-Country Skiing";
    }
}

vocabulary! {
    LearnType {
        Museum => "museum", "Museum";
        Nature => "nature", "Nature";
        Attraction => "attraction", "Attraction";
        HistoricSite => "historic-site", "Historic Site";
        Zoo => "zoo", "Zoo";
        NationalMonument => "national-monument", "National Monument";
        NationalPark => "national-park", "National Park";
        Observatory => "observatory", "Observatory";
    }
}

vocabulary! {
    LearnFeature {
        Activities => "activities", "Activities";
        Exhibits => "exhibits", "Exhibits";
        Scenic => "scenic", "Scenic";
        Tours => "tours", "Tours";
        Demonstrations => "demonstrations", "Demonstrations";
        GiftShop => "gift-shop", "Gift Shop";
        Cafe => "cafe", "Café";
        Restaurant => "restaurant", "Restaurant";
        Workshops => "workshops", "Workshops";
        Wildlife => "wildlife", "Wildlife";
    }
}

vocabulary! {
    ShopType {
        Toys => "toys", "Toys";
        Books => "books", "Books";
        Clothing => "clothing", "Clothing";
        General => "general", "General";
        OutdoorMarket => "outdoor-market", "Outdoor Market";
        Boutique => "boutique", "Boutique";
    }
}

vocabulary! {
    ShopFeature {
        Educational => "educational", "Educational";
        Activities => "activities", "Activities";
        Demonstrations => "demonstrations", "Demonstrations";
        StoryTime => "story-time", "Story Time";
        Art => "art", "Art";
        BoardGames => "board-games", "Board Games";
        Souvenirs => "souvenirs", "Souvenirs";
        OutdoorGear => "outdoor-gear", "Outdoor Gear";
    }
}
