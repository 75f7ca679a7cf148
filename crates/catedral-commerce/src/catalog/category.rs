//! Category types for product organization.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the filter that shows every product.
pub const ALL_LABEL: &str = "Todos";

/// A product category.
///
/// The set is fixed; labels are the ones shown on the storefront menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Rifles,
    Snipers,
    Pistolas,
    Miras,
    #[serde(rename = "Proteção")]
    Protecao,
    Bolinhas,
    #[serde(rename = "Acessórios")]
    Acessorios,
    Suprimentos,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 8] = [
        Category::Rifles,
        Category::Snipers,
        Category::Pistolas,
        Category::Miras,
        Category::Protecao,
        Category::Bolinhas,
        Category::Acessorios,
        Category::Suprimentos,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rifles => "Rifles",
            Category::Snipers => "Snipers",
            Category::Pistolas => "Pistolas",
            Category::Miras => "Miras",
            Category::Protecao => "Proteção",
            Category::Bolinhas => "Bolinhas",
            Category::Acessorios => "Acessórios",
            Category::Suprimentos => "Suprimentos",
        }
    }

    /// ASCII, lowercase form of the label (e.g., "protecao").
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Rifles => "rifles",
            Category::Snipers => "snipers",
            Category::Pistolas => "pistolas",
            Category::Miras => "miras",
            Category::Protecao => "protecao",
            Category::Bolinhas => "bolinhas",
            Category::Acessorios => "acessorios",
            Category::Suprimentos => "suprimentos",
        }
    }

    /// Label without diacritics (e.g., "Protecao").
    pub fn ascii_label(&self) -> &'static str {
        match self {
            Category::Protecao => "Protecao",
            Category::Acessorios => "Acessorios",
            other => other.label(),
        }
    }

    /// Parse a display label. Matching is exact; the diacritic-free form of
    /// a label is also accepted.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || c.ascii_label() == s)
    }

    /// Parse a slug (e.g., "protecao").
    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The category selection applied to the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only products of one category.
    Only(Category),
}

impl CategoryFilter {
    /// Every filter option, in menu order ("Todos" first).
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether a product of `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    /// "Todos" and "all" select everything, ignoring case. Anything else
    /// must be a category label as accepted by [`Category::from_label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL_LABEL) || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_label(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}
