use super::{Query, href, index_param};
use crate::chrome::{BRAND, CHEVRON_LEFT, CHEVRON_RIGHT, PHONE_HREF};
use crate::node::{Node, el};
use krd_core::carousel::{Carousel, CarouselState};
use krd_core::normalize::Product;
use krd_core::routes::{HOME_PATH, Icon};

const MUSIC_ICON: &str = "M9 19V6l12-3v13M9 19c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zm12-3c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zM9 10l12-3";
pub const LOADING: &str = "載入產品中...";
const ALL_PRODUCTS: &str = "/all-products";

/// Which slide each home carousel starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeQuery {
    pub hot: usize,
    pub premium: usize,
}

impl HomeQuery {
    pub fn from_query(query: &Query) -> Self {
        Self {
            hot: index_param(query, "hot"),
            premium: index_param(query, "premium"),
        }
    }

    fn with(self, key: SeriesKey, index: usize) -> Self {
        match key {
            SeriesKey::Hot => Self { hot: index, ..self },
            SeriesKey::Premium => Self {
                premium: index,
                ..self
            },
        }
    }

    fn href(self) -> String {
        let hot = self.hot.to_string();
        let premium = self.premium.to_string();
        href(HOME_PATH, &[("hot", &hot), ("premium", &premium)])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeriesKey {
    Hot,
    Premium,
}

impl SeriesKey {
    fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Premium => "premium",
        }
    }
}

fn carousel(key: SeriesKey, series: &Carousel<Product>, query: HomeQuery) -> Node {
    let index = match series.state() {
        CarouselState::Loading => {
            return el("div")
                .class("carousel-loading")
                .child(el("p").text_child(LOADING));
        }
        CarouselState::Showing { index } => index,
    };
    let len = series.len();
    let at = |i: usize| query.with(key, i % len).href();

    let slides = series.items().iter().enumerate().map(|(i, product)| {
        let class = if i == index {
            "carousel-slide is-active"
        } else {
            "carousel-slide"
        };
        let name = product.name();
        let mut caption = el("div").class("carousel-caption").child(
            el("h3").text_child(name.clone().unwrap_or_else(|| "專業音響設備".to_string())),
        );
        if let Some(description) = product.description() {
            caption = caption.child(el("p").text_child(description));
        }
        el("div")
            .class(class)
            .data("slide", i.to_string())
            .child(Node::image(
                product.img_url.clone(),
                name.unwrap_or_else(|| format!("Product {}", i + 1)),
            ))
            .child(caption)
    });

    let dots = (0..len).map(|i| {
        let class = if i == index {
            "carousel-dot is-active"
        } else {
            "carousel-dot"
        };
        Node::link(at(i))
            .class(class)
            .prop("aria-label", format!("第 {} 張", i + 1))
            .data("dot", i.to_string())
    });

    el("div")
        .class("carousel")
        .data("carousel", key.as_str())
        .data("interval", series.interval().as_millis().to_string())
        .data("index", index.to_string())
        .child(
            el("div")
                .class("carousel-frame")
                .with_children(slides)
                .child(
                    Node::link(at(index + len - 1))
                        .class("carousel-arrow prev")
                        .prop("aria-label", "上一張")
                        .data("prev", "")
                        .child(Node::icon(CHEVRON_LEFT).class("icon")),
                )
                .child(
                    Node::link(at(index + 1))
                        .class("carousel-arrow next")
                        .prop("aria-label", "下一張")
                        .data("next", "")
                        .child(Node::icon(CHEVRON_RIGHT).class("icon")),
                ),
        )
        .child(el("div").class("carousel-dots").with_children(dots))
}

fn series(key: SeriesKey, title: &str, icon: &str, items: &Carousel<Product>, query: HomeQuery) -> Node {
    el("div")
        .class("series")
        .child(
            el("div")
                .class("series-heading")
                .child(Node::icon(icon).class("icon"))
                .child(el("h3").class("gradient-text").text_child(title)),
        )
        .child(carousel(key, items, query))
}

pub fn render(hot: &Carousel<Product>, premium: &Carousel<Product>) -> Node {
    let query = HomeQuery {
        hot: hot.index(),
        premium: premium.index(),
    };

    let hero = el("section").class("hero").child(
        el("div")
            .child(el("h1").class("gradient-text").text_child(BRAND))
            .child(
                el("p")
                    .text_child("專業音響設備供應商，為您提供最優質的音頻解決方案")
                    .child(el("br"))
                    .child(el("span").text_child("致力於打造完美的聲音體驗")),
            )
            .child(
                el("div")
                    .class("hero-actions")
                    .child(Node::link(ALL_PRODUCTS).class("pill").text_child("探索產品"))
                    .child(Node::link(PHONE_HREF).class("pill pill-outline").text_child("聯絡我們")),
            ),
    );

    let featured = el("section")
        .class("section")
        .child(
            el("div")
                .class("section-title")
                .child(el("h2").text_child("精選產品"))
                .child(el("p").text_child("探索我們最受歡迎的專業音響設備，每一款都經過精心挑選")),
        )
        .child(
            el("div")
                .class("series-grid")
                .child(series(SeriesKey::Hot, "熱門推薦系列", MUSIC_ICON, hot, query))
                .child(series(
                    SeriesKey::Premium,
                    "頂級精選系列",
                    Icon::Star.path(),
                    premium,
                    query,
                )),
        );

    let cta = el("section").class("section").child(
        el("div")
            .class("glass-card cta")
            .child(el("h3").text_child("準備開始您的音響之旅？"))
            .child(el("p").text_child(
                "我們的專業團隊隨時為您提供諮詢服務，讓我們一起打造屬於您的完美音響體驗",
            ))
            .child(Node::link(ALL_PRODUCTS).class("pill pill-outline").text_child("查看所有產品")),
    );

    el("div").class("home").child(hero).child(featured).child(cta)
}
