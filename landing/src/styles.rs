//! CSS for the landing and login pages.
//!
//! Injected once by the root component. Slide backgrounds (`slide-bg-*`),
//! call-to-action buttons (`btn-accent-*`) and active indicators (`dot-*`)
//! are keyed by the tokens the content tables use.

pub const LANDING_CSS: &str = r#"
:root {
    --ink: #0f1b2d;
    --ink-muted: #51607a;
    --paper: #ffffff;
    --paper-alt: #f4f6fa;
    --line: #dde3ec;
    --brand: #0b3d91;
    --blue: #2563eb;
    --emerald: #059669;
    --violet: #7c3aed;
    --amber: #d97706;
    --radius: 10px;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    color: var(--ink);
    background: var(--paper);
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

.container { max-width: 1180px; margin: 0 auto; padding: 0 24px; }

/* Buttons */
.btn {
    display: inline-block;
    padding: 12px 22px;
    border-radius: var(--radius);
    font-weight: 600;
    border: 2px solid transparent;
    cursor: pointer;
    transition: background 0.2s, transform 0.2s;
}
.btn:hover { transform: translateY(-1px); }
.btn-primary { background: var(--brand); color: #fff; }
.btn-secondary { border-color: var(--brand); color: var(--brand); background: transparent; }
.btn-accent-blue { background: var(--blue); color: #fff; }
.btn-accent-emerald { background: var(--emerald); color: #fff; }
.btn-accent-violet { background: var(--violet); color: #fff; }
.btn-accent-amber { background: var(--amber); color: #fff; }

/* Header */
.nav {
    position: sticky;
    top: 0;
    z-index: 20;
    background: var(--paper);
    border-bottom: 1px solid var(--line);
}
.nav-inner {
    max-width: 1180px;
    margin: 0 auto;
    padding: 0 24px;
    height: 68px;
    display: flex;
    align-items: center;
    gap: 32px;
}
.nav-brand { display: flex; align-items: center; gap: 10px; font-weight: 700; }
.nav-logo { color: var(--brand); font-size: 22px; }
.nav-title { font-size: 18px; }
.nav-menus { display: flex; gap: 8px; list-style: none; flex: 1; }
.nav-menu { position: relative; }
.nav-trigger {
    background: none;
    border: none;
    font: inherit;
    padding: 22px 12px;
    cursor: pointer;
    color: var(--ink);
}
.nav-menu.open .nav-trigger { color: var(--brand); }
.nav-caret { margin-left: 4px; font-size: 12px; }
.nav-panel {
    position: absolute;
    top: 100%;
    left: 0;
    min-width: 300px;
    padding: 12px;
    background: var(--paper);
    border: 1px solid var(--line);
    border-radius: var(--radius);
    box-shadow: 0 12px 32px rgba(15, 27, 45, 0.12);
}
.nav-panel-link { display: block; padding: 10px 12px; border-radius: 8px; }
.nav-panel-link:hover { background: var(--paper-alt); }
.nav-panel-label { display: block; font-weight: 600; }
.nav-panel-desc { display: block; font-size: 14px; color: var(--ink-muted); }
.nav-cta {
    padding: 8px 18px;
    border-radius: var(--radius);
    background: var(--brand);
    color: #fff;
    font-weight: 600;
}

/* Hero carousel */
.hero { position: relative; overflow: hidden; min-height: 480px; }
.hero-track { position: relative; min-height: 480px; }
.hero-slide {
    position: absolute;
    inset: 0;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.6s ease;
    display: flex;
    align-items: center;
    color: #fff;
}
.hero-slide.active { opacity: 1; pointer-events: auto; }
.slide-bg-ocean { background: linear-gradient(120deg, #0b3d91, #2563eb); }
.slide-bg-forest { background: linear-gradient(120deg, #064e3b, #059669); }
.slide-bg-dusk { background: linear-gradient(120deg, #3b0764, #7c3aed); }
.slide-bg-sunrise { background: linear-gradient(120deg, #7c2d12, #d97706); }
.hero-grid { display: grid; grid-template-columns: 3fr 2fr; gap: 48px; align-items: center; width: 100%; }
.hero-badge {
    display: inline-block;
    padding: 4px 12px;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.16);
    font-size: 14px;
    margin-bottom: 16px;
}
.hero-title { font-size: 48px; line-height: 1.1; margin-bottom: 16px; }
.hero-description { font-size: 18px; opacity: 0.9; margin-bottom: 28px; max-width: 560px; }
.hero-image { font-size: 160px; text-align: center; }
.hero-actions .btn { border-color: rgba(255, 255, 255, 0.4); }

.carousel-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    width: 44px;
    height: 44px;
    border-radius: 50%;
    border: none;
    background: rgba(255, 255, 255, 0.2);
    color: #fff;
    font-size: 28px;
    cursor: pointer;
}
.carousel-arrow.prev { left: 16px; }
.carousel-arrow.next { right: 16px; }
.carousel-dots {
    position: absolute;
    bottom: 20px;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    gap: 10px;
}
.carousel-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: none;
    background: rgba(255, 255, 255, 0.45);
    cursor: pointer;
    transition: width 0.3s;
}
.carousel-dot.active { width: 28px; border-radius: 5px; }
.dot-blue { background: #93c5fd; }
.dot-emerald { background: #6ee7b7; }
.dot-violet { background: #c4b5fd; }
.dot-amber { background: #fcd34d; }
.carousel-progress {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    height: 4px;
    background: rgba(255, 255, 255, 0.3);
}
.carousel-progress-fill {
    height: 100%;
    background: #fff;
    transition: width 0.3s ease;
}

/* Sections */
.section { padding: 80px 0; }
.section-header { text-align: center; margin-bottom: 48px; }
.section-label { color: var(--brand); font-weight: 600; text-transform: uppercase; font-size: 13px; }
.section-title { font-size: 34px; margin-top: 8px; }
.features-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; }
.feature-card {
    padding: 28px;
    border: 1px solid var(--line);
    border-radius: var(--radius);
    background: var(--paper);
}
.feature-icon { font-size: 32px; margin-bottom: 12px; }
.feature-title { font-size: 18px; margin-bottom: 8px; }
.feature-description { color: var(--ink-muted); }

.stats { background: var(--paper-alt); }
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; text-align: center; }
.stat-value { display: block; font-size: 40px; font-weight: 800; color: var(--brand); }
.stat-label { color: var(--ink-muted); }

.cta { background: var(--brand); color: #fff; text-align: center; }
.cta-title { font-size: 34px; margin-bottom: 12px; }
.cta-description { opacity: 0.85; margin-bottom: 28px; }
.cta-actions { display: flex; gap: 16px; justify-content: center; }
.cta .btn-primary { background: #fff; color: var(--brand); }
.cta .btn-secondary { border-color: #fff; color: #fff; }

/* Footer */
.footer { padding: 56px 0 32px; border-top: 1px solid var(--line); }
.footer-grid { display: grid; grid-template-columns: 2fr repeat(3, 1fr); gap: 32px; margin-bottom: 32px; }
.footer-brand { display: flex; align-items: center; gap: 10px; font-weight: 700; }
.footer-logo { color: var(--brand); font-size: 22px; }
.footer-tagline { margin-top: 10px; color: var(--ink-muted); font-size: 14px; }
.footer-heading { font-size: 14px; text-transform: uppercase; margin-bottom: 12px; }
.footer-link { display: block; color: var(--ink-muted); padding: 4px 0; }
.footer-link:hover { color: var(--brand); }
.footer-copyright { font-size: 13px; color: var(--ink-muted); }

/* Login */
.login-header { padding: 20px 24px; border-bottom: 1px solid var(--line); }
.login-main { min-height: calc(100vh - 70px); display: flex; align-items: center; justify-content: center; background: var(--paper-alt); }
.login-card {
    width: 100%;
    max-width: 420px;
    padding: 36px;
    background: var(--paper);
    border-radius: var(--radius);
    box-shadow: 0 12px 32px rgba(15, 27, 45, 0.08);
    display: flex;
    flex-direction: column;
    gap: 10px;
}
.login-title { font-size: 24px; margin-bottom: 12px; }
.login-label { font-weight: 600; font-size: 14px; }
.login-input {
    width: 100%;
    padding: 11px 12px;
    border: 1px solid var(--line);
    border-radius: 8px;
    font: inherit;
}
.login-password { display: flex; gap: 8px; }
.login-toggle { padding: 0 14px; border: 1px solid var(--line); border-radius: 8px; background: var(--paper); cursor: pointer; }
.login-remember { font-size: 14px; margin: 6px 0; }
.login-submit { margin-top: 8px; }
.login-status { font-size: 14px; padding: 10px 12px; background: #ecfdf5; border-radius: 8px; }
.login-help { font-size: 13px; color: var(--ink-muted); text-align: center; margin-top: 8px; }

/* Not found */
.not-found { padding: 120px 0; text-align: center; }
.page-title { font-size: 40px; margin-bottom: 12px; }
.page-description { color: var(--ink-muted); margin-bottom: 28px; }

@media (max-width: 900px) {
    .hero-grid { grid-template-columns: 1fr; }
    .hero-image { display: none; }
    .features-grid, .stats-grid { grid-template-columns: repeat(2, 1fr); }
    .footer-grid { grid-template-columns: 1fr 1fr; }
    .nav-menus { display: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::LANDING_CSS;
    use bankfront::content::SLIDES;

    #[test]
    fn every_slide_token_has_a_rule() {
        for slide in SLIDES {
            let suffix = slide.accent.css_suffix();
            assert!(LANDING_CSS.contains(&format!(".{} {{", slide.bg_color)));
            assert!(LANDING_CSS.contains(&format!(".btn-accent-{suffix} {{")));
            assert!(LANDING_CSS.contains(&format!(".dot-{suffix} {{")));
        }
    }

    #[test]
    fn active_slide_and_dot_are_styled() {
        assert!(LANDING_CSS.contains(".hero-slide.active"));
        assert!(LANDING_CSS.contains(".carousel-dot.active"));
    }

    #[test]
    fn progress_bar_has_track_and_fill() {
        assert!(LANDING_CSS.contains(".carousel-progress {"));
        assert!(LANDING_CSS.contains(".carousel-progress-fill {"));
        assert!(LANDING_CSS.contains("transition: width 0.3s"));
    }
}
