use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub colors: HashMap<String, String>,
    pub font_family: HashMap<String, String>,
    pub radius: Vec<i32>,
    pub shadows: HashMap<String, String>,
}

const DEFAULT_RADIUS: [i32; 7] = [0, 6, 8, 12, 16, 24, 9999];

impl Default for Theme {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert("page".to_string(), "#0f172a".to_string());
        colors.insert("page-deep".to_string(), "#020617".to_string());
        colors.insert("surface".to_string(), "#1e293b".to_string());
        colors.insert("brand".to_string(), "#3b82f6".to_string());
        colors.insert("brand-dark".to_string(), "#2563eb".to_string());
        colors.insert("accent".to_string(), "#a855f7".to_string());
        colors.insert("accent-alt".to_string(), "#ec4899".to_string());
        colors.insert("text".to_string(), "#ffffff".to_string());
        colors.insert("text-soft".to_string(), "#d1d5db".to_string());
        colors.insert("muted".to_string(), "#9ca3af".to_string());
        colors.insert("line".to_string(), "rgba(255,255,255,0.1)".to_string());

        let mut font_family = HashMap::new();
        font_family.insert(
            "sans".to_string(),
            "\"Noto Sans TC\", \"PingFang TC\", system-ui, sans-serif".to_string(),
        );

        let mut shadows = HashMap::new();
        shadows.insert("md".to_string(), "0 4px 12px rgba(0,0,0,0.25)".to_string());
        shadows.insert(
            "lg".to_string(),
            "0 20px 40px rgba(59,130,246,0.15)".to_string(),
        );

        Self {
            colors,
            font_family,
            radius: DEFAULT_RADIUS.to_vec(),
            shadows,
        }
    }
}

/// Steps of [`Theme::radius`], in pixels by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radius {
    Zero = 0,
    Xs = 1,
    Sm = 2,
    Md = 3,
    Lg = 4,
    Xl = 5,
    Full = 6,
}

impl Theme {
    pub fn color(&self, key: &str, fallback: &str) -> String {
        self.colors
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Corner radius for `step`; a scale shorter than the step falls back
    /// to the default scale.
    pub fn radius(&self, step: Radius) -> i32 {
        let at = step as usize;
        self.radius
            .get(at)
            .or_else(|| DEFAULT_RADIUS.get(at))
            .copied()
            .unwrap_or(0)
    }
}

/// One node of a server-rendered page tree.
///
/// `node_type` is either one of the component types below or a plain HTML
/// tag name. Attributes keep insertion order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            props: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new("Text").prop("children", content)
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Self::new("Fragment").with_children(children)
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new("Image").prop("src", src).prop("alt", alt)
    }

    /// Stroked 24x24 SVG icon from a single path.
    pub fn icon(path: impl Into<String>) -> Self {
        Self::new("Icon").prop("d", path)
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self::new("a").prop("href", href)
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.push((key.into(), value.into()));
        self
    }

    pub fn class(self, class_name: impl Into<String>) -> Self {
        self.prop("className", class_name)
    }

    /// Adds a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.prop(format!("data-{key}"), value)
    }

    /// Boolean attribute such as `selected` or `hidden`.
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.prop(format!("?{}", key.into()), "")
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text_child(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    pub fn get_prop(&self, key: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub fn el(tag: &str) -> Node {
    Node::new(tag)
}

const HTML_TAGS: &[&str] = &[
    "a", "aside", "br", "button", "div", "footer", "form", "h1", "h2", "h3", "h4", "header",
    "input", "label", "li", "main", "nav", "noscript", "option", "p", "section", "select", "span",
    "strong", "ul",
];

const VOID_TAGS: &[&str] = &["br", "input"];

pub fn render_to_string(node: &Node) -> String {
    match node.node_type.as_str() {
        "Text" => render_text(node),
        "Fragment" => render_children(node),
        "Image" => render_image(node),
        "Icon" => render_icon(node),
        tag if HTML_TAGS.contains(&tag) => render_element(tag, node),
        _ => format!("<!-- unknown node type: {} -->", node.node_type),
    }
}

fn render_text(node: &Node) -> String {
    escape_html(node.get_prop("children").unwrap_or_default())
}

fn render_children(node: &Node) -> String {
    node.children.iter().map(render_to_string).collect()
}

fn render_attrs(node: &Node, skip: &[&str]) -> String {
    let mut attrs = String::new();
    for (key, value) in &node.props {
        if skip.contains(&key.as_str()) {
            continue;
        }
        if let Some(flag) = key.strip_prefix('?') {
            attrs.push_str(&format!(" {}", escape_html(flag)));
            continue;
        }
        let name = if key == "className" { "class" } else { key };
        if name == "class" && value.trim().is_empty() {
            continue;
        }
        attrs.push_str(&format!(" {}=\"{}\"", name, escape_html(value.trim())));
    }
    attrs
}

fn render_element(tag: &str, node: &Node) -> String {
    let attrs = render_attrs(node, &[]);
    if VOID_TAGS.contains(&tag) {
        return format!("<{}{} />", tag, attrs);
    }
    format!("<{}{}>{}</{}>", tag, attrs, render_children(node), tag)
}

fn render_image(node: &Node) -> String {
    let mut attrs = render_attrs(node, &["alt"]);
    attrs.push_str(&format!(
        " alt=\"{}\"",
        escape_html(node.get_prop("alt").unwrap_or_default())
    ));
    format!("<img{} draggable=\"false\" />", attrs)
}

fn render_icon(node: &Node) -> String {
    let d = node.get_prop("d").unwrap_or_default();
    let attrs = render_attrs(node, &["d"]);
    format!(
        "<svg{} fill=\"none\" stroke=\"currentColor\" viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\" d=\"{}\" /></svg>",
        attrs,
        escape_html(d)
    )
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadNode {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub theme: Option<Theme>,
    pub head: Option<HeadNode>,
    pub body_class: Option<String>,
    /// Bootstrap payload handed to the client runtime.
    pub state: Option<Value>,
    pub body: Vec<Node>,
}

impl Document {
    pub fn render(&self) -> String {
        render_document(self)
    }
}

pub fn render_document(doc: &Document) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-Hant\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");

    if let Some(head) = &doc.head {
        if let Some(title) = &head.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }
        if let Some(description) = &head.description {
            html.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                escape_html(description)
            ));
        }
    }

    html.push_str("</head>\n");
    match doc.body_class.as_deref().filter(|c| !c.is_empty()) {
        Some(class) => html.push_str(&format!("<body class=\"{}\">\n", escape_html(class))),
        None => html.push_str("<body>\n"),
    }

    html.push_str("<div id=\"app\">\n");
    for child in &doc.body {
        html.push_str(&render_to_string(child));
    }
    html.push_str("\n</div>\n");
    html.push_str("</body>\n</html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_escapes() {
        let html = render_to_string(&Node::text("<b>KRD & MICGO</b>"));
        assert_eq!(html, "&lt;b&gt;KRD &amp; MICGO&lt;/b&gt;");
    }

    #[test]
    fn test_render_element_with_class_and_data() {
        let node = el("button")
            .class("nav-button is-active")
            .data("path", "/krd-products")
            .text_child("KRD");
        assert_eq!(
            render_to_string(&node),
            "<button class=\"nav-button is-active\" data-path=\"/krd-products\">KRD</button>"
        );
    }

    #[test]
    fn test_render_image_always_has_alt() {
        let html = render_to_string(&Node::new("Image").prop("src", "a.jpg"));
        assert!(html.starts_with("<img src=\"a.jpg\""));
        assert!(html.contains("alt=\"\""));
    }

    #[test]
    fn test_flags_and_void_tags() {
        let html = render_to_string(&el("option").prop("value", "name").flag("selected"));
        assert_eq!(html, "<option value=\"name\" selected></option>");
        assert_eq!(render_to_string(&el("br")), "<br />");
    }

    #[test]
    fn test_unknown_type_is_a_comment() {
        assert_eq!(
            render_to_string(&Node::new("Marquee")),
            "<!-- unknown node type: Marquee -->"
        );
    }

    #[test]
    fn test_icon_renders_path() {
        let html = render_to_string(&Node::icon("M4 6h16").class("icon"));
        assert!(html.starts_with("<svg class=\"icon\""));
        assert!(html.contains("d=\"M4 6h16\""));
    }

    #[test]
    fn test_document_render() {
        let doc = Document {
            head: Some(HeadNode {
                title: Some("KRD MICGO".to_string()),
                description: None,
            }),
            body_class: Some("scroll-locked".to_string()),
            body: vec![Node::fragment([el("main").text_child("hi")])],
            ..Document::default()
        };
        let html = doc.render();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>KRD MICGO</title>"));
        assert!(html.contains("<body class=\"scroll-locked\">"));
        assert!(html.contains("<main>hi</main>"));
    }
}
