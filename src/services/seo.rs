// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Search-engine metadata: schema.org JSON-LD, page metadata and the sitemap.

use crate::models::category::Category;
use crate::models::listing::{Listing, ListingDetails};
use crate::models::vocab::{EatFeature, PlayType};
use crate::services::catalog::ListingCatalog;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const SITE_NAME: &str = "Kid Friendly Flagstaff";

const SITE_DESCRIPTION: &str = "Discover the best kid-friendly activities, restaurants, hikes, \
     and more in Flagstaff, Arizona.";

const ORGANIZATION_DESCRIPTION: &str = "Your family guide to kid-friendly activities, \
     restaurants, hikes, and more in Flagstaff, Arizona.";

/// Absolute URL of a listing's detail page.
pub fn listing_url(site_url: &str, listing: &Listing) -> String {
    format!("{}/listing/{}", site_url, listing.slug())
}

pub fn category_url(site_url: &str, category: Category) -> String {
    format!("{}/{}", site_url, category.as_str())
}

/// Apply the site title template.
pub fn page_title(title: &str) -> String {
    format!("{} | {}", title, SITE_NAME)
}

// --- JSON-LD ---

pub fn organization_json_ld(site_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "url": site_url,
        "logo": format!("{}/icon.svg", site_url),
        "description": ORGANIZATION_DESCRIPTION,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Flagstaff",
            "addressRegion": "AZ",
            "addressCountry": "US",
        },
    })
}

pub fn website_json_ld(site_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": SITE_NAME,
        "url": site_url,
        "description": SITE_DESCRIPTION,
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{}/search?q={{search_term_string}}", site_url),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

/// Schema.org description of one listing, typed by category.
pub fn listing_json_ld(site_url: &str, listing: &Listing) -> Value {
    let base = &listing.base;
    let street = base
        .address
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(&base.address);

    let mut obj = Map::new();
    obj.insert("@context".into(), json!("https://schema.org"));
    obj.insert("name".into(), json!(base.name));
    obj.insert("description".into(), json!(base.description));
    obj.insert(
        "address".into(),
        json!({
            "@type": "PostalAddress",
            "streetAddress": street,
            "addressLocality": "Flagstaff",
            "addressRegion": "AZ",
            "addressCountry": "US",
        }),
    );
    obj.insert("url".into(), json!(listing_url(site_url, listing)));

    if let Some(coords) = base.coordinates {
        obj.insert(
            "geo".into(),
            json!({"@type": "GeoCoordinates", "latitude": coords.lat, "longitude": coords.lng}),
        );
    }
    if let Some(image) = base.images.first() {
        obj.insert("image".into(), json!(image));
    }
    if let Some(ref phone) = base.phone {
        obj.insert("telephone".into(), json!(phone));
    }
    if let Some(ref website) = base.website {
        obj.insert("sameAs".into(), json!(website));
    }
    let price = base.price_range.map_or("$$", |p| p.as_str());

    let schema_type = match &listing.details {
        ListingDetails::Eat(eat) => {
            obj.insert("servesCuisine".into(), json!(eat.cuisine));
            obj.insert("priceRange".into(), json!(price));
            obj.insert(
                "acceptsReservations".into(),
                json!(eat.features.contains(&EatFeature::Reservations)),
            );
            if let Some(ref website) = base.website {
                obj.insert("menu".into(), json!(website));
            }
            "Restaurant"
        }
        ListingDetails::Play(play) => {
            obj.insert("publicAccess".into(), json!(true));
            if play.play_type == PlayType::Playground {
                "Playground"
            } else {
                "LocalBusiness"
            }
        }
        ListingDetails::Hike(hike) => {
            let mut props = vec![
                json!({"@type": "PropertyValue", "name": "Distance", "value": hike.distance}),
                json!({"@type": "PropertyValue", "name": "Difficulty", "value": hike.difficulty}),
            ];
            if let Some(ref gain) = hike.elevation_gain {
                props.push(json!({"@type": "PropertyValue", "name": "Elevation Gain", "value": gain}));
            }
            obj.insert("additionalProperty".into(), Value::Array(props));
            "Place"
        }
        ListingDetails::Learn(learn) => {
            obj.insert("touristType".into(), json!("Family"));
            obj.insert("isAccessibleForFree".into(), json!(!learn.admission_required));
            "TouristAttraction"
        }
        ListingDetails::Shop(_) => {
            obj.insert("priceRange".into(), json!(price));
            "Store"
        }
    };
    obj.insert("@type".into(), json!(schema_type));

    if !matches!(listing.details, ListingDetails::Hike(_)) {
        if let Some(ref hours) = base.hours {
            obj.insert("openingHours".into(), json!(hours));
        }
    }

    Value::Object(obj)
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

/// Home > Category > Listing
pub fn listing_breadcrumbs(site_url: &str, listing: &Listing) -> Vec<Breadcrumb> {
    let category = listing.category();
    vec![
        Breadcrumb {
            name: "Home".to_string(),
            url: site_url.to_string(),
        },
        Breadcrumb {
            name: category.info().name.to_string(),
            url: category_url(site_url, category),
        },
        Breadcrumb {
            name: listing.name().to_string(),
            url: listing_url(site_url, listing),
        },
    ]
}

pub fn breadcrumb_json_ld(items: &[Breadcrumb]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

// --- Page metadata ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub site_name: &'static str,
    pub locale: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Full document title, template applied.
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
}

impl PageMetadata {
    fn new(title: String, description: String, url: String, og_type: &'static str) -> Self {
        Self {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: url.clone(),
                og_type,
                site_name: SITE_NAME,
                locale: "en_US",
            },
            title,
            description,
            canonical: url,
        }
    }
}

pub fn home_metadata(site_url: &str) -> PageMetadata {
    PageMetadata::new(
        SITE_NAME.to_string(),
        SITE_DESCRIPTION.to_string(),
        site_url.to_string(),
        "website",
    )
}

pub fn category_metadata(site_url: &str, category: Category) -> PageMetadata {
    let info = category.info();
    PageMetadata::new(
        page_title(info.name),
        info.page_description.to_string(),
        category_url(site_url, category),
        "website",
    )
}

pub fn listing_metadata(site_url: &str, listing: &Listing) -> PageMetadata {
    let description = if listing.base.short_description.is_empty() {
        listing.base.description.clone()
    } else {
        listing.base.short_description.clone()
    };
    PageMetadata::new(
        page_title(listing.name()),
        description,
        listing_url(site_url, listing),
        "article",
    )
}

// --- Sitemap ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Home, then category pages, then every listing.
pub fn sitemap_entries(site_url: &str, catalog: &ListingCatalog, today: NaiveDate) -> Vec<SitemapEntry> {
    let mut entries = vec![SitemapEntry {
        url: site_url.to_string(),
        last_modified: today,
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    }];

    entries.extend(Category::ALL.iter().map(|category| SitemapEntry {
        url: category_url(site_url, *category),
        last_modified: today,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    }));

    entries.extend(catalog.all().iter().map(|listing| SitemapEntry {
        url: listing_url(site_url, listing),
        last_modified: listing.base.last_updated,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.6,
    }));

    entries
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
