//! Read-only food catalog loaded from a CSV file at startup.

use std::{cmp::Ordering, fs::File, io, path::Path};

use anyhow::{Context, bail};
use csv::{ReaderBuilder, StringRecord, Trim};
use rand::seq::SliceRandom;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{models::CatalogItem, pricing::parse_price};

pub const RECOMMENDATION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    #[default]
    TopRated,
    Randomized,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

struct Columns {
    name: usize,
    price: usize,
    category: usize,
    description: Option<usize>,
    rating: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> anyhow::Result<Self> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| header.trim().to_lowercase())
            .collect();
        let find = |names: &[&str]| {
            normalized
                .iter()
                .position(|header| names.contains(&header.as_str()))
        };

        let Some(name) = find(&["name"]) else {
            bail!("catalog is missing required column 'name'");
        };
        let Some(price) = find(&["price"]) else {
            bail!("catalog is missing required column 'price'");
        };
        let Some(category) = find(&["category"]) else {
            bail!("catalog is missing required column 'category'");
        };

        Ok(Self {
            name,
            price,
            category,
            description: find(&["description", "desc"]),
            rating: find(&["rating", "review"]),
        })
    }
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Load the catalog at `path`. A missing file yields an empty catalog so
    /// the rest of the service stays usable.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "catalog file not found, serving an empty catalog");
            return Ok(Self::default());
        }
        let file = File::open(path)
            .with_context(|| format!("failed to open catalog {}", path.display()))?;
        let catalog = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), items = catalog.items.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> anyhow::Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let columns = Columns::locate(reader.headers()?)?;

        let mut items = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("").trim();

            let name = field(columns.name);
            if name.is_empty() {
                tracing::warn!(row = line + 1, "skipping catalog row without a name");
                continue;
            }
            let Some(price) = parse_price(field(columns.price)) else {
                tracing::warn!(row = line + 1, name, "skipping catalog row with an invalid price");
                continue;
            };

            items.push(CatalogItem {
                name: name.to_string(),
                price,
                description: columns
                    .description
                    .map(|idx| field(idx).to_string())
                    .unwrap_or_default(),
                category: field(columns.category).to_string(),
                rating: columns.rating.and_then(|idx| field(idx).parse().ok()),
            });
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    /// The requested category if it exists, otherwise the first one.
    pub fn resolve_category<'a>(&'a self, requested: Option<&str>) -> Option<&'a str> {
        let categories = self.categories();
        requested
            .and_then(|wanted| categories.iter().copied().find(|c| *c == wanted))
            .or_else(|| categories.first().copied())
    }

    pub fn in_category(&self, category: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn recommendations(
        &self,
        category: Option<&str>,
        kind: RecommendationKind,
    ) -> Vec<CatalogItem> {
        let mut pool: Vec<&CatalogItem> = match category {
            Some(category) => self.in_category(category),
            None => self.items.iter().collect(),
        };

        match kind {
            RecommendationKind::Randomized => pool
                .choose_multiple(&mut rand::thread_rng(), RECOMMENDATION_COUNT)
                .map(|item| (*item).clone())
                .collect(),
            RecommendationKind::TopRated => {
                pool.sort_by(|a, b| {
                    b.rating
                        .partial_cmp(&a.rating)
                        .unwrap_or(Ordering::Equal)
                        .then(b.price.cmp(&a.price))
                });
                pool.into_iter()
                    .take(RECOMMENDATION_COUNT)
                    .cloned()
                    .collect()
            }
        }
    }
}
