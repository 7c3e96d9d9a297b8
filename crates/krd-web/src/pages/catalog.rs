use super::{Query, href};
use crate::chrome::{CHEVRON_RIGHT, image_modal};
use crate::node::{Node, el};
use krd_core::catalog::{CatalogView, SortBy, ViewMode};
use krd_core::normalize::Product;
use krd_core::routes::CatalogPage;

const GRID_ICON: &str = "M4 6a2 2 0 012-2h2a2 2 0 012 2v2a2 2 0 01-2 2H6a2 2 0 01-2-2V6zM14 6a2 2 0 012-2h2a2 2 0 012 2v2a2 2 0 01-2 2h-2a2 2 0 01-2-2V6zM4 16a2 2 0 012-2h2a2 2 0 012 2v2a2 2 0 01-2 2H6a2 2 0 01-2-2v-2zM14 16a2 2 0 012-2h2a2 2 0 012 2v2a2 2 0 01-2 2h-2a2 2 0 01-2-2v-2z";
const LIST_ICON: &str = "M4 6h16M4 10h16M4 14h16M4 18h16";
const ZOOM_ICON: &str = "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0zM10 7v3m0 0v3m0-3h3m-3 0H7";
const EMPTY_ICON: &str = "M20 13V6a2 2 0 00-2-2H6a2 2 0 00-2 2v7m16 0v5a2 2 0 01-2 2H6a2 2 0 01-2 2m16-7V9a2 2 0 00-2-2H6a2 2 0 00-2 2v4";

pub const EMPTY_TITLE: &str = "暫無產品";
pub const EMPTY_MESSAGE: &str = "此分類目前沒有可用的產品，請稍後再試";

/// Listing state requested through the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub view: ViewMode,
    pub sort: SortBy,
    pub zoom: Option<String>,
}

impl CatalogQuery {
    /// Unknown values fall back to the defaults.
    pub fn from_query(query: &Query) -> Self {
        let view = query
            .get("view")
            .map(|raw| {
                raw.parse().unwrap_or_else(|err| {
                    tracing::debug!(%err, "falling back to grid view");
                    ViewMode::default()
                })
            })
            .unwrap_or_default();
        let sort = query
            .get("sort")
            .map(|raw| {
                raw.parse().unwrap_or_else(|err| {
                    tracing::debug!(%err, "falling back to name sort");
                    SortBy::default()
                })
            })
            .unwrap_or_default();
        let zoom = query.get("zoom").filter(|id| !id.is_empty()).cloned();
        Self { view, sort, zoom }
    }

    pub fn apply(&self, view: &mut CatalogView) {
        view.set_view_mode(self.view);
        view.set_sort_by(self.sort);
        if let Some(id) = &self.zoom {
            if !view.zoom(id) {
                tracing::debug!(id = %id, "zoom target not in listing");
            }
        }
    }
}

fn state_href(page: &CatalogPage, view: ViewMode, sort: SortBy, zoom: Option<&str>) -> String {
    let mut pairs = vec![("view", view.as_str()), ("sort", sort.as_str())];
    if let Some(id) = zoom {
        pairs.push(("zoom", id));
    }
    href(page.path, &pairs)
}

fn header(page: &CatalogPage) -> Node {
    let mut title_row = el("div").class("catalog-title");
    if let Some(icon) = page.icon {
        title_row = title_row.child(
            el("div")
                .class("catalog-icon")
                .child(Node::icon(icon.path()).class("icon")),
        );
    }
    title_row = title_row.child(el("h1").class("gradient-text").text_child(page.title));

    el("header")
        .class("catalog-header")
        .child(title_row)
        .child(el("p").class("catalog-description").text_child(page.description))
}

fn controls(page: &CatalogPage, view: &CatalogView) -> Node {
    let option = |sort: SortBy, label: &str| {
        let node = el("option").prop("value", sort.as_str()).text_child(label);
        if view.sort_by() == sort {
            node.flag("selected")
        } else {
            node
        }
    };

    let sort_form = el("form")
        .class("catalog-sort")
        .prop("method", "get")
        .prop("action", page.path)
        .child(el("label").prop("for", "sort").text_child("排序方式："))
        .child(
            el("select")
                .prop("id", "sort")
                .prop("name", "sort")
                .data("sort-select", "")
                .child(option(SortBy::Name, "依名稱"))
                .child(option(SortBy::Newest, "最新優先")),
        )
        .child(
            el("input")
                .prop("type", "hidden")
                .prop("name", "view")
                .prop("value", view.view_mode().as_str()),
        )
        .child(el("noscript").child(el("button").prop("type", "submit").text_child("套用")));

    let toggle = |mode: ViewMode, icon: &str, label: &str| {
        let class = if view.view_mode() == mode { "is-active" } else { "" };
        Node::link(state_href(page, mode, view.sort_by(), None))
            .class(class)
            .prop("aria-label", label)
            .data("view-toggle", mode.as_str())
            .child(Node::icon(icon).class("icon"))
    };

    el("div")
        .class("catalog-controls")
        .child(sort_form)
        .child(
            el("div")
                .class("catalog-view")
                .child(el("span").text_child("檢視方式："))
                .child(
                    el("div")
                        .class("view-toggle")
                        .child(toggle(ViewMode::Grid, GRID_ICON, "格狀"))
                        .child(toggle(ViewMode::List, LIST_ICON, "清單")),
                ),
        )
}

pub fn empty_state() -> Node {
    el("div")
        .class("empty-state")
        .child(Node::icon(EMPTY_ICON).class("icon"))
        .child(el("h3").text_child(EMPTY_TITLE))
        .child(el("p").text_child(EMPTY_MESSAGE))
}

fn product_card(page: &CatalogPage, view: &CatalogView, product: &Product, position: usize, order: usize) -> Node {
    let label = product.label(position);
    let zoom_href = state_href(page, view.view_mode(), view.sort_by(), Some(product.id()));
    let zoom_link = |node: Node| {
        node.prop("href", zoom_href.clone())
            .data("zoom-src", product.img_url.clone())
            .data("zoom-id", product.id())
    };

    let mut card = el("div")
        .class("glass-card product-card")
        .data("product", product.id())
        .data("order", order.to_string())
        .data("sort-name", product.display_name());

    if let Some(price) = product.price() {
        card = card.child(el("span").class("product-badge").text_child(format!("${price}")));
    }

    card = card.child(
        zoom_link(el("a").class("product-image")).child(Node::image(product.img_url.clone(), label.clone())),
    );

    let mut info = el("div")
        .class("product-info")
        .child(el("h3").class("product-title").text_child(label));
    if let Some(description) = product.description() {
        info = info.child(el("p").class("product-description").text_child(description));
    }
    if let Some(price) = product.price() {
        info = info.child(el("span").class("product-price").text_child(format!("${price}")));
    }
    info = info.child(
        zoom_link(el("a").class("product-zoom"))
            .child(Node::icon(ZOOM_ICON).class("icon"))
            .child(el("span").text_child("點擊查看大圖"))
            .child(Node::icon(CHEVRON_RIGHT).class("icon")),
    );

    card.child(info)
}

fn product_list(page: &CatalogPage, view: &CatalogView) -> Node {
    let class = match view.view_mode() {
        ViewMode::Grid => "product-grid",
        ViewMode::List => "product-list",
    };
    let cards = view
        .sorted_indexed()
        .into_iter()
        .enumerate()
        .map(|(position, (order, product))| product_card(page, view, product, position, order));
    el("div")
        .class(class)
        .data("product-list", "")
        .with_children(cards)
}

/// Listing body for one catalog route, including the image modal.
pub fn render(page: &CatalogPage, view: &CatalogView) -> Node {
    let body = if view.is_empty() {
        empty_state()
    } else {
        product_list(page, view)
    };
    let close_href = state_href(page, view.view_mode(), view.sort_by(), None);

    el("section")
        .class("catalog")
        .data("catalog", page.table)
        .child(header(page))
        .child(controls(page, view))
        .child(body)
        .child(image_modal(view.modal(), &close_href))
}
