use crate::chrome::{ADDRESS, BRAND, CLOCK, COMPANY, PHONE, PHONE_DISPLAY, PHONE_HREF, PIN};
use crate::node::{Node, el};
use krd_core::normalize::ServiceItem;

const SERVICE_PLACEHOLDERS: usize = 8;
const ALL_PRODUCTS: &str = "/all-products";

fn company_card() -> Node {
    let stat = |value: &str, label: &str| {
        el("div")
            .child(el("strong").text_child(value))
            .child(el("span").text_child(label))
    };

    el("div")
        .class("glass-card about-card")
        .child(el("h2").class("gradient-text").text_child(COMPANY))
        .child(el("h3").text_child(BRAND))
        .child(el("p").text_child(
            "我們是一家專業的音響設備供應商，擁有多年的行業經驗。致力於提供高品質的麥克風、擴音設備及相關配件，並以專業的技術支援和優質的產品服務，滿足客戶的各種音響需求。",
        ))
        .child(
            el("div")
                .class("about-stats")
                .child(stat("10+", "年專業經驗"))
                .child(stat("1000+", "滿意客戶")),
        )
}

fn contact_card() -> Node {
    let row = |icon: &str, title: &str, body: Node| {
        el("div")
            .class("contact-row")
            .child(Node::icon(icon).class("icon"))
            .child(el("div").child(el("h4").text_child(title)).child(body))
    };

    el("div")
        .class("glass-card about-card")
        .child(el("h2").class("gradient-text").text_child("聯絡我們"))
        .child(row(PIN, "地址", el("p").text_child(ADDRESS)))
        .child(row(
            PHONE,
            "電話",
            Node::link(PHONE_HREF)
                .child(el("strong").text_child(PHONE_DISPLAY))
                .child(el("br"))
                .child(el("span").text_child("點擊撥打電話")),
        ))
        .child(row(
            CLOCK,
            "營業時間",
            el("p")
                .text_child("週一至週六 09:00 - 17:30")
                .child(el("br"))
                .child(el("span").text_child("週日及國定假日休息")),
        ))
}

fn service_tile(item: &ServiceItem) -> Node {
    el("div")
        .class("glass-card service-tile")
        .child(
            el("div")
                .class("service-image")
                .child(Node::image(item.img_url.clone(), item.icon_name.clone())),
        )
        .child(el("h4").text_child(item.icon_name.clone()))
}

/// Tiles for the services grid; placeholders stand in until records arrive.
fn services(items: &[ServiceItem]) -> Node {
    let tiles: Vec<Node> = if items.is_empty() {
        (0..SERVICE_PLACEHOLDERS)
            .map(|_| {
                el("div")
                    .class("glass-card service-tile is-placeholder")
                    .child(el("div").class("service-image"))
            })
            .collect()
    } else {
        items.iter().map(service_tile).collect()
    };

    el("section")
        .class("section")
        .child(
            el("div")
                .class("section-title")
                .child(el("h2").class("gradient-text").text_child("我們的服務"))
                .child(el("p").text_child("提供全方位的音響解決方案，滿足不同場合的需求")),
        )
        .child(el("div").class("services-grid").with_children(tiles))
}

pub fn render(items: &[ServiceItem]) -> Node {
    let hero = el("section").class("hero").child(
        el("div")
            .child(el("h1").class("gradient-text").text_child("關於我們"))
            .child(el("p").text_child(
                "專業音響設備供應商，致力於為每位客戶提供最優質的音頻解決方案",
            )),
    );

    let info = el("section").class("section").child(
        el("div")
            .class("about-grid")
            .child(company_card())
            .child(contact_card()),
    );

    let cta = el("section").class("section").child(
        el("div")
            .class("glass-card cta")
            .child(el("h3").text_child("準備開始合作？"))
            .child(el("p").text_child("讓我們的專業團隊為您提供最適合的音響解決方案"))
            .child(
                el("div")
                    .class("hero-actions")
                    .child(Node::link(PHONE_HREF).class("pill").text_child("立即聯絡"))
                    .child(
                        Node::link(ALL_PRODUCTS)
                            .class("pill pill-outline")
                            .text_child("查看產品目錄"),
                    ),
            ),
    );

    el("div")
        .class("about")
        .child(hero)
        .child(info)
        .child(services(items))
        .child(cta)
}
