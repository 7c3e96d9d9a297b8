//! Site chrome shared by every page: nav bar, side menu, footer and the
//! image modal.

use crate::node::{Node, el};
use krd_core::modal::ImageModal;
use krd_core::normalize::{Logo, NavigationEntry};
use krd_core::routes::{ABOUT_PATH, HOME_PATH, Icon, NEW_PRODUCTS_PATH};

pub(crate) const ARROW_RIGHT: &str = "M13 7l5 5m0 0l-5 5m5-5H6";
pub(crate) const CHEVRON_RIGHT: &str = "M9 5l7 7-7 7";
pub(crate) const CHEVRON_LEFT: &str = "M15 19l-7-7 7-7";
pub(crate) const MENU: &str = "M4 6h16M4 10h16M4 14h16M4 18h16";
pub(crate) const PHONE: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
pub(crate) const PIN: &str =
    "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z";
pub(crate) const CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";
const CLOSE: &str = "M6 18L18 6M6 6l12 12";

pub const BRAND: &str = "KRD MICGO";
pub const COMPANY: &str = "羽程企業社";
pub const PHONE_DISPLAY: &str = "(04) 22798787";
pub const PHONE_HREF: &str = "tel:04-22798787";
pub const ADDRESS: &str = "411 台中市太平區永平路二段320之1號";
const ABOUT_LABEL: &str = "商店介紹";
const SIDE_MENU_PLACEHOLDERS: usize = 4;

/// Records every page's chrome is built from. Fetched once per request and
/// shared by the nav bar and side menu.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub logo: Option<Logo>,
    pub navigation: Vec<NavigationEntry>,
}

impl Chrome {
    pub fn new(logos: Vec<Logo>, navigation: Vec<NavigationEntry>) -> Self {
        Self {
            logo: logos.into_iter().next(),
            navigation,
        }
    }
}

fn is_active(current: &str, path: &str) -> bool {
    current == path
}

fn nav_button(entry: &NavigationEntry, current: &str) -> Node {
    let class = if is_active(current, &entry.path) {
        "nav-button is-active"
    } else {
        "nav-button"
    };
    Node::link(entry.path.clone())
        .class(class)
        .data("nav-path", entry.path.clone())
        .text_child(entry.title.clone())
}

fn mobile_item(entry: &NavigationEntry, current: &str) -> Node {
    let class = if is_active(current, &entry.path) {
        "mobile-item is-active"
    } else {
        "mobile-item"
    };
    Node::link(entry.path.clone())
        .class(class)
        .child(el("span").text_child(entry.title.clone()))
        .child(Node::icon(CHEVRON_RIGHT).class("icon"))
}

pub fn nav_bar(chrome: &Chrome, current: &str) -> Node {
    let brand = match &chrome.logo {
        Some(logo) => el("span")
            .class("navbar-logo")
            .child(Node::image(logo.img.clone(), format!("{BRAND} Logo"))),
        None => el("span").class("navbar-brand").text_child(BRAND),
    };

    let about_class = if is_active(current, ABOUT_PATH) {
        "pill nav-about is-active"
    } else {
        "pill nav-about"
    };
    let about = Node::link(ABOUT_PATH)
        .class(about_class)
        .child(el("span").text_child(ABOUT_LABEL))
        .child(Node::icon(ARROW_RIGHT).class("icon"));

    let links = el("div")
        .class("navbar-links")
        .with_children(chrome.navigation.iter().map(|e| nav_button(e, current)))
        .child(about.clone());

    let mobile = el("div")
        .class("mobile-menu")
        .data("mobile-menu", "")
        .with_children(chrome.navigation.iter().map(|e| mobile_item(e, current)))
        .child(about);

    el("nav")
        .class("navbar")
        .data("navbar", "")
        .child(
            el("div")
                .class("navbar-inner")
                .child(Node::link(HOME_PATH).class("navbar-home").child(brand))
                .child(links)
                .child(
                    el("button")
                        .class("menu-toggle")
                        .prop("type", "button")
                        .prop("aria-label", "選單")
                        .data("menu-toggle", "")
                        .child(Node::icon(MENU).class("icon")),
                ),
        )
        .child(mobile)
}

pub fn side_menu(chrome: &Chrome, title: &str, current: &str) -> Node {
    let heading = el("div")
        .class("glass-card side-menu-title")
        .child(el("h2").class("gradient-text").text_child(title));

    let items: Vec<Node> = if chrome.navigation.is_empty() {
        (0..SIDE_MENU_PLACEHOLDERS)
            .map(|_| el("div").class("side-menu-item is-placeholder"))
            .collect()
    } else {
        chrome
            .navigation
            .iter()
            .map(|entry| {
                let class = if is_active(current, &entry.path) {
                    "side-menu-item is-active"
                } else {
                    "side-menu-item"
                };
                Node::link(entry.path.clone())
                    .class(class)
                    .child(el("span").text_child(entry.title.clone()))
                    .child(Node::icon(CHEVRON_RIGHT).class("icon"))
            })
            .collect()
    };

    let categories = el("div")
        .class("glass-card side-menu-list")
        .child(
            el("h3")
                .child(Node::icon(MENU).class("icon"))
                .text_child("產品分類"),
        )
        .with_children(items);

    let contact = el("div")
        .class("glass-card side-menu-contact")
        .child(el("h3").text_child("需要協助？"))
        .child(el("p").text_child("我們的專業團隊隨時為您提供產品諮詢和技術支援"))
        .child(
            Node::link(PHONE_HREF)
                .class("side-menu-phone")
                .child(Node::icon(PHONE).class("icon"))
                .child(el("strong").text_child(PHONE_DISPLAY))
                .child(el("span").text_child("點擊撥打電話")),
        )
        .child(el("p").text_child("服務時間：週一至週六 09:00-17:30"));

    let quick = el("div").class("glass-card side-menu-quick").child(
        Node::link(NEW_PRODUCTS_PATH)
            .class("pill")
            .child(Node::icon(Icon::Star.path()).class("icon"))
            .child(el("span").text_child("查看最新產品")),
    );

    el("aside").class("side-menu").child(
        el("div")
            .class("side-menu-inner")
            .child(heading)
            .child(categories)
            .child(contact)
            .child(quick),
    )
}

pub fn footer() -> Node {
    let column = |icon: &str, title: &str, body: Node| {
        el("div")
            .child(Node::icon(icon).class("icon"))
            .child(el("h4").text_child(title))
            .child(body)
    };

    el("footer")
        .class("site-footer")
        .child(
            el("div")
                .class("footer-heading")
                .child(el("h3").class("gradient-text").text_child("聯絡我們"))
                .child(el("p").text_child("專業音響設備供應，竭誠為您服務")),
        )
        .child(
            el("div")
                .class("footer-columns")
                .child(column(PIN, "地址", el("p").text_child(ADDRESS)))
                .child(column(PHONE, "電話", el("p").text_child(PHONE_DISPLAY)))
                .child(column(
                    CLOCK,
                    "服務時間",
                    el("p")
                        .text_child("09:00 AM ~ 17:30 PM")
                        .child(el("br"))
                        .child(el("span").text_child("(例、假日休息)")),
                )),
        )
        .child(
            el("p")
                .class("copyright")
                .text_child(format!("© 2025 {COMPANY} {BRAND}. All rights reserved.")),
        )
}

/// The modal is always in the page so the client runtime can open it;
/// `close_href` is where the backdrop and close control lead without script.
pub fn image_modal(modal: &ImageModal, close_href: &str) -> Node {
    let class = if modal.is_open() {
        "image-modal is-open"
    } else {
        "image-modal"
    };
    el("div")
        .class(class)
        .prop("role", "dialog")
        .prop("aria-modal", "true")
        .data("image-modal", "")
        .child(
            Node::link(close_href)
                .class("image-modal-backdrop")
                .prop("aria-label", "關閉")
                .data("modal-backdrop", ""),
        )
        .child(
            el("div")
                .class("image-modal-frame")
                .data("modal-frame", "")
                .child(
                    Node::link(close_href)
                        .class("image-modal-close")
                        .prop("aria-label", "關閉圖片")
                        .data("modal-close", "")
                        .child(Node::icon(CLOSE).class("icon")),
                )
                .child(
                    Node::image(modal.image().unwrap_or_default(), "產品詳細圖片")
                        .data("modal-image", ""),
                ),
        )
}

/// Wraps page content with the nav bar, optional side menu and footer.
pub fn layout(chrome: &Chrome, current: &str, side_menu_title: Option<&str>, content: Node) -> Node {
    let main = match side_menu_title {
        Some(title) => el("div")
            .class("layout-main layout-with-menu")
            .child(side_menu(chrome, title, current))
            .child(el("main").class("layout-content").child(content)),
        None => el("main").class("layout-main").child(content),
    };
    Node::fragment([nav_bar(chrome, current), main, footer()])
}
