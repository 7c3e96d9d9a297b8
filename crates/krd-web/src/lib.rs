#[cfg(feature = "axum")]
pub mod adapters;
pub mod chrome;
pub mod loader;
pub mod node;
pub mod pages;
pub mod site;
mod style;

#[cfg(feature = "axum")]
pub use adapters::axum::{query_from_uri, router};
pub use loader::Loader;
pub use node::{Document, HeadNode, Node, Radius, Theme, el, escape_html, render_document, render_to_string};
pub use pages::Query;
pub use site::Site;
pub use style::site_css;

pub const KRD_RUNTIME_JS: &str = include_str!("krd-runtime.js");
pub const RUNTIME_PATH: &str = "/__krd/runtime.js";

/// Renders `doc` with the site stylesheet inlined and the client runtime
/// bootstrapped from `doc.state`.
pub fn render_with_runtime(doc: &Document) -> String {
    let mut html = render_document(doc);
    let theme = doc.theme.clone().unwrap_or_default();

    if let Some(head_pos) = html.find("</head>") {
        let style_tag = format!("<style>{}</style>\n", site_css(&theme));
        html.insert_str(head_pos, &style_tag);
    }

    let state = doc.state.clone().unwrap_or_else(|| serde_json::json!({}));
    let bootstrap = serde_json::to_string(&state)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");
    let scripts = format!(
        "<script>window.__KRD__ = {};</script>\n<script src=\"{}\" defer></script>\n",
        bootstrap, RUNTIME_PATH
    );
    if let Some(body_pos) = html.rfind("</body>") {
        html.insert_str(body_pos, &scripts);
    }

    html
}
