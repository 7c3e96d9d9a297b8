use crate::node::{Radius, Theme};

pub fn site_css(theme: &Theme) -> String {
    let font_sans = theme
        .font_family
        .get("sans")
        .cloned()
        .unwrap_or_else(|| "system-ui, sans-serif".to_string());
    let page = theme.color("page", "#0f172a");
    let page_deep = theme.color("page-deep", "#020617");
    let surface = theme.color("surface", "#1e293b");
    let brand = theme.color("brand", "#3b82f6");
    let brand_dark = theme.color("brand-dark", "#2563eb");
    let accent = theme.color("accent", "#a855f7");
    let accent_alt = theme.color("accent-alt", "#ec4899");
    let text = theme.color("text", "#ffffff");
    let text_soft = theme.color("text-soft", "#d1d5db");
    let muted = theme.color("muted", "#9ca3af");
    let line = theme.color("line", "rgba(255,255,255,0.1)");
    let shadow_lg = theme
        .shadows
        .get("lg")
        .cloned()
        .unwrap_or_else(|| "0 20px 40px rgba(0,0,0,0.3)".to_string());
    let radius_xs = theme.radius(Radius::Xs);
    let radius_sm = theme.radius(Radius::Sm);
    let radius_md = theme.radius(Radius::Md);
    let radius_lg = theme.radius(Radius::Lg);
    let radius_xl = theme.radius(Radius::Xl);
    let radius_full = theme.radius(Radius::Full);

    format!(
        r#"
html, body {{
  margin: 0;
  padding: 0;
  min-height: 100%;
  background: {page};
}}

body.scroll-locked {{
  overflow: hidden;
}}

#app, #app * {{
  box-sizing: border-box;
}}

#app {{
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  font-family: {font_sans};
  color: {text};
  background: linear-gradient(135deg, {page} 0%, {surface} 50%, {page} 100%);
  -webkit-font-smoothing: antialiased;
}}

#app a {{
  color: inherit;
  text-decoration: none;
}}

#app button {{
  font: inherit;
  color: inherit;
  cursor: pointer;
  background: none;
  border: 0;
}}

.gradient-text {{
  color: transparent;
  background-image: linear-gradient(90deg, {brand}, {accent}, {accent_alt});
  -webkit-background-clip: text;
  background-clip: text;
}}

.glass-card {{
  background: rgba(255,255,255,0.05);
  border: 1px solid {line};
  border-radius: {radius_xl}px;
  backdrop-filter: blur(12px);
}}

.pill {{
  display: inline-flex;
  align-items: center;
  gap: 8px;
  padding: 14px 28px;
  border-radius: {radius_full}px;
  font-weight: 700;
  background: linear-gradient(90deg, {brand}, {accent});
  color: {text};
}}

.pill:hover {{
  background: linear-gradient(90deg, {brand_dark}, {accent});
}}

.pill-outline {{
  background: none;
  border: 2px solid rgba(255,255,255,0.3);
}}

.icon {{
  width: 24px;
  height: 24px;
}}

/* nav bar */
.navbar {{
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(2,6,23,0.7);
  border-bottom: 1px solid {line};
  backdrop-filter: blur(16px);
  transition: background-color 0.5s ease;
}}

.navbar.is-scrolled {{
  background: rgba(2,6,23,0.9);
  box-shadow: {shadow_lg};
}}

.navbar-inner {{
  display: flex;
  justify-content: space-between;
  align-items: center;
  max-width: 1280px;
  height: 80px;
  margin: 0 auto;
  padding: 0 16px;
}}

.navbar-logo img {{
  height: 40px;
  padding: 6px 10px;
  background: rgba(255,255,255,0.95);
  border-radius: {radius_lg}px;
}}

.navbar-brand {{
  font-size: 24px;
  font-weight: 900;
}}

.navbar-links {{
  display: flex;
  align-items: center;
  gap: 8px;
}}

.nav-button {{
  padding: 10px 20px;
  border-radius: {radius_md}px;
  font-size: 14px;
  color: {text_soft};
}}

.nav-button.is-active {{
  color: {text};
  background: rgba(59,130,246,0.2);
  border: 1px solid rgba(59,130,246,0.3);
}}

.menu-toggle {{
  display: none;
}}

.mobile-menu {{
  display: none;
  padding: 16px;
  border-top: 1px solid {line};
}}

.mobile-menu.is-open {{
  display: block;
}}

@media (max-width: 1023px) {{
  .navbar-links {{ display: none; }}
  .menu-toggle {{ display: block; padding: 12px; }}
  .side-menu {{ display: none; }}
}}

/* layout */
.layout-main {{
  flex: 1;
}}

.layout-with-menu {{
  display: flex;
  max-width: 1280px;
  width: 100%;
  margin: 0 auto;
}}

.side-menu {{
  width: 320px;
  padding: 24px;
  margin-right: 32px;
}}

.side-menu-inner {{
  position: sticky;
  top: 96px;
  display: flex;
  flex-direction: column;
  gap: 24px;
}}

.side-menu-item {{
  display: flex;
  align-items: center;
  width: 100%;
  padding: 12px 16px;
  border-radius: {radius_md}px;
  color: {text_soft};
}}

.side-menu-item.is-active {{
  color: {text};
  background: rgba(59,130,246,0.2);
}}

.side-menu-item.is-placeholder {{
  height: 44px;
  background: rgba(75,85,99,0.4);
}}

/* hero and sections */
.hero {{
  padding: 128px 16px;
  text-align: center;
}}

.hero h1 {{
  font-size: clamp(56px, 10vw, 128px);
  font-weight: 900;
  margin: 0 0 32px;
}}

.hero p {{
  max-width: 768px;
  margin: 0 auto 48px;
  font-size: 24px;
  color: {text_soft};
}}

.section {{
  max-width: 1280px;
  margin: 0 auto;
  padding: 80px 16px;
}}

.section-title {{
  text-align: center;
  margin-bottom: 64px;
}}

.section-title p {{
  color: {muted};
}}

.hero-actions {{
  display: flex;
  flex-wrap: wrap;
  gap: 24px;
  justify-content: center;
}}

.cta {{
  padding: 64px;
  text-align: center;
}}

.about-grid {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(360px, 1fr));
  gap: 48px;
}}

.about-card {{
  padding: 40px;
}}

.about-stats {{
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 24px;
  margin-top: 32px;
}}

.about-stats strong {{
  display: block;
  font-size: 36px;
  color: {brand};
}}

.contact-row {{
  display: flex;
  gap: 16px;
  align-items: flex-start;
  margin-top: 24px;
}}

/* carousel */
.series-heading {{
  display: flex;
  align-items: center;
  gap: 12px;
  margin-bottom: 24px;
}}

.series-grid {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
  gap: 48px;
}}

.carousel {{
  position: relative;
}}

.carousel-frame {{
  position: relative;
  aspect-ratio: 16 / 9;
  overflow: hidden;
  border-radius: {radius_xl}px;
  box-shadow: {shadow_lg};
}}

.carousel-slide {{
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity 1s ease;
}}

.carousel-slide.is-active {{
  opacity: 1;
}}

.carousel-slide img {{
  width: 100%;
  height: 100%;
  object-fit: cover;
}}

.carousel-caption {{
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 32px;
  background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
}}

.carousel-arrow {{
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 56px;
  height: 56px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: {radius_full}px;
  background: rgba(0,0,0,0.6);
  border: 1px solid rgba(255,255,255,0.2);
}}

.carousel-arrow.prev {{ left: 16px; }}
.carousel-arrow.next {{ right: 16px; }}

.carousel-dots {{
  display: flex;
  justify-content: center;
  gap: 12px;
  margin-top: 32px;
}}

.carousel-dot {{
  width: 16px;
  height: 16px;
  border-radius: {radius_full}px;
  background: #6b7280;
}}

.carousel-dot.is-active {{
  width: 40px;
  background: linear-gradient(90deg, {brand}, {accent});
}}

.carousel-loading {{
  aspect-ratio: 16 / 9;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: {radius_lg}px;
  background: linear-gradient(135deg, {surface}, {page});
  color: {muted};
}}

/* catalog */
.catalog-header {{
  padding: 80px 24px;
  border-bottom: 1px solid {line};
}}

.catalog-header h1 {{
  font-size: 56px;
  font-weight: 900;
  margin: 0 0 8px;
}}

.catalog-icon {{
  width: 64px;
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: {radius_lg}px;
  background: linear-gradient(90deg, {brand}, {accent});
}}

.catalog-controls {{
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: 16px;
  padding: 32px 24px;
  color: {muted};
}}

.catalog-controls select {{
  background: {surface};
  color: {text};
  border: 1px solid rgba(255,255,255,0.2);
  border-radius: {radius_sm}px;
  padding: 8px 12px;
}}

.view-toggle {{
  display: inline-flex;
  padding: 4px;
  border-radius: {radius_sm}px;
  background: {surface};
}}

.view-toggle a {{
  padding: 8px;
  border-radius: {radius_xs}px;
}}

.view-toggle a.is-active {{
  background: {brand};
  color: {text};
}}

.product-grid {{
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 32px;
  padding: 0 24px 48px;
}}

.product-list {{
  display: flex;
  flex-direction: column;
  gap: 24px;
  padding: 0 24px 48px;
}}

.product-card {{
  display: flex;
  flex-direction: column;
  overflow: hidden;
  position: relative;
}}

.product-grid .product-card {{
  height: 384px;
}}

.product-list .product-card {{
  flex-direction: row;
  align-items: center;
  gap: 24px;
  padding: 24px;
}}

.product-image {{
  display: block;
  overflow: hidden;
  background: linear-gradient(135deg, rgba(59,130,246,0.1), rgba(168,85,247,0.1));
}}

.product-grid .product-image {{ height: 256px; }}
.product-list .product-image {{ width: 96px; height: 96px; border-radius: {radius_md}px; flex-shrink: 0; }}

.product-image img {{
  width: 100%;
  height: 100%;
  object-fit: cover;
}}

.product-info {{
  padding: 16px;
}}

.product-price {{
  color: {brand};
  font-weight: 700;
}}

.product-badge {{
  position: absolute;
  top: 12px;
  right: 12px;
  z-index: 1;
  padding: 4px 10px;
  border-radius: {radius_full}px;
  background: {brand};
}}

.product-list .product-badge {{ display: none; }}

.empty-state {{
  padding: 80px 0;
  text-align: center;
}}

.empty-state h3 {{
  font-size: 30px;
  color: {text_soft};
}}

.empty-state p {{
  color: #6b7280;
}}

/* services */
.services-grid {{
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 32px;
}}

.service-tile {{
  padding: 24px;
  text-align: center;
}}

.service-tile .service-image {{
  aspect-ratio: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: {radius_lg}px;
  background: #ffffff;
  margin-bottom: 24px;
}}

.service-tile img {{
  max-width: 80%;
  max-height: 80%;
  object-fit: contain;
  filter: brightness(0.2) contrast(1.5) saturate(1.2);
}}

.service-tile.is-placeholder .service-image {{
  background: #374151;
}}

/* modal */
.image-modal {{
  position: fixed;
  inset: 0;
  z-index: 60;
  display: none;
  align-items: center;
  justify-content: center;
  padding: 16px;
}}

.image-modal.is-open {{
  display: flex;
}}

.image-modal-backdrop {{
  position: absolute;
  inset: 0;
  background: rgba(0,0,0,0.95);
}}

.image-modal-frame {{
  position: relative;
  max-width: 100%;
  max-height: 100%;
}}

.image-modal-frame img {{
  max-width: 100%;
  max-height: 90vh;
  object-fit: contain;
  border-radius: {radius_lg}px;
}}

.image-modal-close {{
  position: absolute;
  top: -24px;
  right: -24px;
  z-index: 2;
  width: 56px;
  height: 56px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: {radius_full}px;
  background: rgba(255,255,255,0.9);
  color: #1f2937;
}}

/* footer */
.site-footer {{
  margin-top: auto;
  padding: 48px 16px;
  background: rgba(0,0,0,0.2);
  border-top: 1px solid {line};
  text-align: center;
}}

.footer-columns {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 32px;
  max-width: 1280px;
  margin: 0 auto;
}}

.footer-columns p {{
  color: {text_soft};
  font-size: 14px;
}}

.copyright {{
  margin-top: 48px;
  padding-top: 32px;
  border-top: 1px solid {line};
  color: {muted};
  font-size: 14px;
}}

.page-deep {{
  background: linear-gradient(135deg, {page_deep}, {page}, {page_deep});
}}
"#
    )
}
