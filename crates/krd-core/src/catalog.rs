use crate::modal::{ImageModal, ScrollLock};
use crate::normalize::Product;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Name,
    /// Accepted but not implemented: keeps the order the data service
    /// returned.
    Newest,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Newest => "newest",
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "newest" => Ok(Self::Newest),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browser-like collation for product names.
///
/// Letters compare by base form first, so accents and case only matter
/// when the base letters tie: `a` < `á` < `b`, then lowercase before
/// uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Stable; `Newest` returns the input order.
pub fn sort_products(products: &[Product], sort_by: SortBy) -> Vec<&Product> {
    sort_indexed(products, sort_by)
        .into_iter()
        .map(|(_, product)| product)
        .collect()
}

/// Like [`sort_products`], paired with each product's position in the
/// input slice.
pub fn sort_indexed(products: &[Product], sort_by: SortBy) -> Vec<(usize, &Product)> {
    let mut out: Vec<(usize, &Product)> = products.iter().enumerate().collect();
    if sort_by == SortBy::Name {
        out.sort_by(|(_, a), (_, b)| locale_compare(&a.display_name(), &b.display_name()));
    }
    out
}

/// Local state of one product-listing page.
///
/// The product list is fixed once loaded; sort and view changes only
/// reorder or restyle it.
#[derive(Debug)]
pub struct CatalogView {
    title: String,
    products: Vec<Product>,
    view_mode: ViewMode,
    sort_by: SortBy,
    modal: ImageModal,
}

impl CatalogView {
    pub fn new(title: impl Into<String>, products: Vec<Product>, lock: ScrollLock) -> Self {
        Self {
            title: title.into(),
            products,
            view_mode: ViewMode::default(),
            sort_by: SortBy::default(),
            modal: ImageModal::new(lock),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    pub fn sorted(&self) -> Vec<&Product> {
        sort_products(&self.products, self.sort_by)
    }

    pub fn sorted_indexed(&self) -> Vec<(usize, &Product)> {
        sort_indexed(&self.products, self.sort_by)
    }

    /// Opens the modal on the product with `id`; unknown ids leave it closed.
    pub fn zoom(&mut self, id: &str) -> bool {
        let Some(url) = self
            .products
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.img_url.clone())
        else {
            return false;
        };
        self.modal.open(url);
        true
    }

    pub fn modal(&self) -> &ImageModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ImageModal {
        &mut self.modal
    }
}
