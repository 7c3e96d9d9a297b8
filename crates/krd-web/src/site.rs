//! Page assembly: resolve a route, load its records concurrently, and render
//! the full document.

use crate::chrome::{BRAND, Chrome, layout};
use crate::loader::Loader;
use crate::node::{Document, HeadNode, Node, Theme};
use crate::pages::catalog::CatalogQuery;
use crate::pages::home::HomeQuery;
use crate::pages::{Query, about, catalog, home};
use crate::render_with_runtime;
use krd_core::carousel::{Carousel, HOT_SERIES_INTERVAL, PREMIUM_SERIES_INTERVAL};
use krd_core::catalog::CatalogView;
use krd_core::modal::ScrollLock;
use krd_core::normalize::{Logo, NavigationEntry, Product, ServiceItem};
use krd_core::routes::{
    CatalogPage, HOT_SERIES_TABLE, LOGO_TABLE, NAVIGATION_TABLE, PREMIUM_SERIES_TABLE, Page,
    SERVICES_TABLE,
};
use krd_core::source::RecordSource;
use serde_json::{Value, json};
use std::sync::Arc;

const SITE_DESCRIPTION: &str = "專業音響設備供應商，為您提供最優質的音頻解決方案";

pub struct Site {
    source: Arc<dyn RecordSource>,
    theme: Theme,
}

struct Rendered {
    page: Page,
    content: Node,
    side_menu: Option<&'static str>,
    body_class: Option<String>,
    state: Value,
}

impl Site {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Full HTML for `path`, or `None` when no page lives there.
    pub async fn render(&self, path: &str, query: &Query) -> Option<String> {
        let page = Page::resolve(path)?;
        Some(self.render_page(page, query).await)
    }

    pub async fn render_page(&self, page: Page, query: &Query) -> String {
        let loader = Loader::mount(Arc::clone(&self.source));
        let chrome = async {
            let (logos, navigation) = tokio::join!(
                loader.load::<Logo>(LOGO_TABLE),
                loader.load::<NavigationEntry>(NAVIGATION_TABLE),
            );
            Chrome::new(logos, navigation)
        };

        let (chrome, rendered) = match page {
            Page::Home => tokio::join!(chrome, Self::home(&loader, query)),
            Page::About => tokio::join!(chrome, Self::about(&loader)),
            Page::Catalog(catalog_page) => {
                tokio::join!(chrome, Self::catalog(&loader, catalog_page, query))
            }
        };
        tracing::debug!(
            route = rendered.page.path(),
            navigation = chrome.navigation.len(),
            "page rendered"
        );
        self.document(&chrome, rendered)
    }

    async fn home(loader: &Loader, query: &Query) -> Rendered {
        let (hot, premium) = tokio::join!(
            loader.load::<Product>(HOT_SERIES_TABLE),
            loader.load::<Product>(PREMIUM_SERIES_TABLE),
        );
        let selected = HomeQuery::from_query(query);
        let mut hot = Carousel::new(hot, HOT_SERIES_INTERVAL);
        hot.select(selected.hot);
        let mut premium = Carousel::new(premium, PREMIUM_SERIES_INTERVAL);
        premium.select(selected.premium);

        Rendered {
            page: Page::Home,
            content: home::render(&hot, &premium),
            side_menu: None,
            body_class: None,
            state: json!({
                "route": Page::Home.path(),
                "hot": hot.index(),
                "premium": premium.index(),
            }),
        }
    }

    async fn about(loader: &Loader) -> Rendered {
        let services = loader.load::<ServiceItem>(SERVICES_TABLE).await;
        Rendered {
            page: Page::About,
            content: about::render(&services),
            side_menu: None,
            body_class: None,
            state: json!({ "route": Page::About.path() }),
        }
    }

    async fn catalog(loader: &Loader, page: &'static CatalogPage, query: &Query) -> Rendered {
        let products = loader.load::<Product>(page.table).await;
        let lock = ScrollLock::new();
        let mut view = CatalogView::new(page.title, products, lock.clone());
        let requested = CatalogQuery::from_query(query);
        requested.apply(&mut view);

        let content = catalog::render(page, &view);
        let body_class = lock.is_locked().then(|| "scroll-locked".to_string());
        let state = json!({
            "route": page.path,
            "table": page.table,
            "view": view.view_mode().as_str(),
            "sort": view.sort_by().as_str(),
            "products": view.products().len(),
        });
        Rendered {
            page: Page::Catalog(page),
            content,
            side_menu: Some(page.title),
            body_class,
            state,
        }
    }

    fn document(&self, chrome: &Chrome, rendered: Rendered) -> String {
        let (title, description) = match rendered.page {
            Page::Home => (BRAND.to_string(), SITE_DESCRIPTION),
            Page::About => (format!("關於我們 | {BRAND}"), SITE_DESCRIPTION),
            Page::Catalog(page) => (format!("{} | {BRAND}", page.title), page.description),
        };
        let doc = Document {
            theme: Some(self.theme.clone()),
            head: Some(HeadNode {
                title: Some(title),
                description: Some(description.to_string()),
            }),
            body_class: rendered.body_class,
            state: Some(rendered.state),
            body: vec![layout(
                chrome,
                rendered.page.path(),
                rendered.side_menu,
                rendered.content,
            )],
        };
        render_with_runtime(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krd_core::record::Record;
    use krd_core::source::StaticSource;

    fn site(source: StaticSource) -> Site {
        Site::new(Arc::new(source))
    }

    fn record(id: &str, fields: Value) -> Record {
        Record::new(id, fields.as_object().cloned().unwrap())
    }

    #[tokio::test]
    async fn unknown_route_renders_nothing() {
        assert!(site(StaticSource::new()).render("/nope", &Query::new()).await.is_none());
    }

    #[tokio::test]
    async fn catalog_title_and_side_menu() {
        let html = site(StaticSource::new())
            .render("/accessories", &Query::new())
            .await
            .unwrap();
        assert!(html.contains("<title>配件 | KRD MICGO</title>"));
        assert!(html.contains("side-menu"));
        assert!(html.contains("暫無產品"));
    }

    #[tokio::test]
    async fn zoom_locks_body_scroll() {
        let source = StaticSource::new().with_table(
            "krd",
            vec![record("p1", json!({"img_url": "https://img.example/p1.jpg"}))],
        );
        let query: Query = [("zoom".to_string(), "p1".to_string())].into_iter().collect();
        let html = site(source).render("/krd-products", &query).await.unwrap();
        assert!(html.contains("<body class=\"scroll-locked\">"));

        let html = site(StaticSource::new())
            .render("/krd-products", &query)
            .await
            .unwrap();
        assert!(html.contains("<body>"));
    }

    #[tokio::test]
    async fn home_fetches_chrome_and_both_series() {
        let source = Arc::new(StaticSource::new());
        let site = Site::new(source.clone());
        let html = site.render("/", &Query::new()).await.unwrap();
        assert_eq!(source.calls(), 4);
        assert!(html.contains("<title>KRD MICGO</title>"));
        assert!(!html.contains("class=\"side-menu\""));
        assert_eq!(html.matches("載入產品中...").count(), 2);
    }
}
