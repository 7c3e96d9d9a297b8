pub const NAVIGATION_TABLE: &str = "navigation";
pub const LOGO_TABLE: &str = "logo";
pub const SERVICES_TABLE: &str = "abouts";
pub const HOT_SERIES_TABLE: &str = "hot-products-1";
pub const PREMIUM_SERIES_TABLE: &str = "hot-products-2";

pub const HOME_PATH: &str = "/";
pub const ABOUT_PATH: &str = "/abouts";
pub const NEW_PRODUCTS_PATH: &str = "/new-products";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Star,
    Microphone,
    Speaker,
    Flask,
}

impl Icon {
    /// SVG path data, drawn on a 24x24 stroked view box.
    pub fn path(self) -> &'static str {
        match self {
            Self::Star => {
                "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z"
            }
            Self::Microphone => {
                "M19 11a7 7 0 01-7 7m0 0a7 7 0 01-7-7m7 7v4m0 0H8m4 0h4m-4-8a3 3 0 01-3-3V5a3 3 0 116 0v6a3 3 0 01-3 3z"
            }
            Self::Speaker => {
                "M15.536 8.464a5 5 0 010 7.072m2.828-9.9a9 9 0 010 12.728M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z"
            }
            Self::Flask => {
                "M19.428 15.428a2 2 0 00-1.022-.547l-2.387-.477a6 6 0 00-3.86.517l-.318.158a6 6 0 01-3.86.517L6.05 15.21a2 2 0 00-1.806.547M8 4h8l-1 1v5.172a2 2 0 00.586 1.414l5 5c1.26 1.26.367 3.414-1.415 3.414H4.828c-1.782 0-2.674-2.154-1.414-3.414l5-5A2 2 0 009 10.172V5L8 4z"
            }
        }
    }
}

/// Parameters of one product-listing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogPage {
    pub path: &'static str,
    pub title: &'static str,
    pub table: &'static str,
    pub description: &'static str,
    pub icon: Option<Icon>,
}

pub const CATALOG_PAGES: &[CatalogPage] = &[
    CatalogPage {
        path: "/all-products",
        title: "所有商品",
        table: "all-product",
        description: "瀏覽我們完整的產品系列，包含各種專業音響設備",
        icon: None,
    },
    CatalogPage {
        path: NEW_PRODUCTS_PATH,
        title: "最新商品",
        table: "new-product",
        description: "探索我們最新推出的音響產品，體驗最前沿的技術",
        icon: Some(Icon::Star),
    },
    CatalogPage {
        path: "/micgo-products",
        title: "MICGO",
        table: "micgo",
        description: "MICGO 系列專業麥克風，為您提供清晰純淨的音質體驗",
        icon: Some(Icon::Microphone),
    },
    CatalogPage {
        path: "/krd-products",
        title: "KRD",
        table: "krd",
        description: "KRD 系列音響設備，專業品質值得信賴",
        icon: Some(Icon::Microphone),
    },
    CatalogPage {
        path: "/wired-micphone",
        title: "有線麥克風",
        table: "wired-micphone",
        description: "專業有線麥克風系列，穩定可靠的音頻傳輸",
        icon: Some(Icon::Microphone),
    },
    CatalogPage {
        path: "/wireless-micphone",
        title: "無線麥克風",
        table: "wireless-micphone",
        description: "自由無拘束的無線麥克風，讓您隨時隨地展現專業",
        icon: Some(Icon::Microphone),
    },
    CatalogPage {
        path: "/trumpet",
        title: "擴大機 / 喇叭",
        table: "trumpet",
        description: "高品質擴音設備，為您打造完美的音響體驗",
        icon: Some(Icon::Speaker),
    },
    CatalogPage {
        path: "/accessories",
        title: "配件",
        table: "accessories",
        description: "各種音響配件，完善您的專業音響系統",
        icon: Some(Icon::Flask),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Catalog(&'static CatalogPage),
}

impl Page {
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = match path.trim_end_matches('/') {
            "" => HOME_PATH,
            p => p,
        };
        match trimmed {
            HOME_PATH => Some(Self::Home),
            ABOUT_PATH => Some(Self::About),
            _ => CATALOG_PAGES
                .iter()
                .find(|page| page.path == trimmed)
                .map(Self::Catalog),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::About => ABOUT_PATH,
            Self::Catalog(page) => page.path,
        }
    }

    pub fn all() -> impl Iterator<Item = Page> {
        [Self::Home, Self::About]
            .into_iter()
            .chain(CATALOG_PAGES.iter().map(Self::Catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolves_every_declared_route() {
        let paths = [
            "/",
            "/abouts",
            "/all-products",
            "/new-products",
            "/micgo-products",
            "/krd-products",
            "/wired-micphone",
            "/wireless-micphone",
            "/trumpet",
            "/accessories",
        ];
        for path in paths {
            let page = Page::resolve(path).unwrap_or_else(|| panic!("{path} should resolve"));
            assert_eq!(page.path(), path);
        }
        assert_eq!(Page::all().count(), paths.len());
    }

    #[test]
    fn trailing_slash_and_unknown_paths() {
        assert_eq!(Page::resolve(""), Some(Page::Home));
        assert!(matches!(Page::resolve("/trumpet/"), Some(Page::Catalog(p)) if p.table == "trumpet"));
        assert_eq!(Page::resolve("/products"), None);
    }

    #[test]
    fn catalog_tables_and_paths_are_unique() {
        let tables: HashSet<_> = CATALOG_PAGES.iter().map(|p| p.table).collect();
        let paths: HashSet<_> = CATALOG_PAGES.iter().map(|p| p.path).collect();
        assert_eq!(tables.len(), CATALOG_PAGES.len());
        assert_eq!(paths.len(), CATALOG_PAGES.len());
    }

    #[test]
    fn new_products_page_has_star_icon() {
        let Some(Page::Catalog(page)) = Page::resolve(NEW_PRODUCTS_PATH) else {
            panic!("new products page missing");
        };
        assert_eq!(page.table, "new-product");
        assert_eq!(page.icon, Some(Icon::Star));
    }
}
