use stylist::GlobalStyle;
use yew::prelude::*;

/// Site colours. The site always renders dark; there is no toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub primary_light: &'static str,
}

pub const DARK: Palette = Palette {
    bg_primary: "#0a0a0a",
    bg_secondary: "#141414",
    bg_tertiary: "#1f1f1f",
    text_primary: "#ffffff",
    text_secondary: "#d1d5db",
    text_tertiary: "#9ca3af",
    border: "#262626",
    primary: "#0098AC",
    primary_hover: "#007A8C",
    primary_light: "#00B8CE",
};

pub fn global_css(palette: &Palette) -> String {
    format!(
        r#"
        :root {{
            --bg-primary: {bg_primary};
            --bg-secondary: {bg_secondary};
            --bg-tertiary: {bg_tertiary};
            --text-primary: {text_primary};
            --text-secondary: {text_secondary};
            --text-tertiary: {text_tertiary};
            --border-color: {border};
            --primary: {primary};
            --primary-hover: {primary_hover};
            --primary-light: {primary_light};
            color-scheme: dark;
        }}
        *, *::before, *::after {{ box-sizing: border-box; }}
        html {{ scroll-behavior: smooth; }}
        body {{
            margin: 0;
            background: var(--bg-primary);
            color: var(--text-primary);
            font-family: 'Inter', system-ui, -apple-system, sans-serif;
            -webkit-font-smoothing: antialiased;
        }}
        a {{ color: inherit; text-decoration: none; }}
        img {{ display: block; max-width: 100%; }}
        .accent {{ color: var(--primary); }}
        .container {{ max-width: 80rem; margin: 0 auto; padding: 0 1rem; }}
        .page {{ min-height: 100vh; padding: 8rem 1rem 5rem; }}
        .page-header {{ text-align: center; margin-bottom: 4rem; }}
        .page-header h1 {{ font-size: clamp(2.5rem, 6vw, 3.75rem); font-weight: 700; margin: 0 0 1.5rem; }}
        .page-header p {{ font-size: 1.25rem; color: var(--text-tertiary); max-width: 48rem; margin: 0 auto; line-height: 1.7; }}
        .section-title {{ font-size: clamp(2rem, 4vw, 2.5rem); font-weight: 700; text-align: center; margin: 0 0 3rem; }}
        .card {{
            background: linear-gradient(135deg, var(--bg-secondary), var(--bg-tertiary));
            border: 1px solid var(--border-color);
            border-radius: 0.75rem;
            transition: border-color 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
        }}
        .card:hover {{ border-color: rgba(0, 152, 172, 0.5); }}
        .icon-badge {{
            width: 3.5rem; height: 3.5rem;
            display: flex; align-items: center; justify-content: center;
            background: rgba(0, 152, 172, 0.1);
            border-radius: 0.5rem;
            font-size: 1.75rem;
            flex-shrink: 0;
        }}
        .btn-primary {{
            display: inline-block;
            background: var(--primary);
            color: #fff;
            font-weight: 600;
            font-size: 1.125rem;
            padding: 1rem 2rem;
            border: none;
            border-radius: 0.5rem;
            cursor: pointer;
            transition: background 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
        }}
        .btn-primary:hover {{
            background: var(--primary-hover);
            transform: scale(1.05);
            box-shadow: 0 10px 25px rgba(0, 152, 172, 0.5);
        }}
        .cta-panel {{
            text-align: center;
            background: linear-gradient(90deg, rgba(0, 152, 172, 0.1), rgba(0, 152, 172, 0.2));
            border: 1px solid rgba(0, 152, 172, 0.3);
            border-radius: 1rem;
            padding: 3rem;
        }}
        .cta-panel h2 {{ font-size: clamp(1.75rem, 4vw, 2.25rem); margin: 0 0 1.5rem; }}
        .cta-panel p {{ font-size: 1.25rem; color: var(--text-tertiary); max-width: 42rem; margin: 0 auto 2rem; }}
        .reveal {{
            opacity: 0;
            transition: opacity 0.6s ease, transform 0.6s ease;
        }}
        .reveal.from-up {{ transform: translateY(50px); }}
        .reveal.from-down {{ transform: translateY(-50px); }}
        .reveal.from-left {{ transform: translateX(-50px); }}
        .reveal.from-right {{ transform: translateX(50px); }}
        .reveal.from-zoom {{ transform: scale(0.8); }}
        .reveal.revealed {{ opacity: 1; transform: none; }}
        @media (prefers-reduced-motion: reduce) {{
            .reveal {{ transition: none; opacity: 1; transform: none; }}
        }}
        "#,
        bg_primary = palette.bg_primary,
        bg_secondary = palette.bg_secondary,
        bg_tertiary = palette.bg_tertiary,
        text_primary = palette.text_primary,
        text_secondary = palette.text_secondary,
        text_tertiary = palette.text_tertiary,
        border = palette.border,
        primary = palette.primary,
        primary_hover = palette.primary_hover,
        primary_light = palette.primary_light,
    )
}

/// Mounts the site-wide style sheet for as long as the calling component
/// lives.
#[hook]
pub fn use_global_theme() {
    let _style = use_memo(
        |_| match GlobalStyle::new(global_css(&DARK)) {
            Ok(style) => Some(style),
            Err(err) => {
                log::warn!("failed to mount theme styles: {err}");
                None
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_exposes_every_palette_variable() {
        let css = global_css(&DARK);
        for var in [
            "--bg-primary: #0a0a0a",
            "--bg-secondary: #141414",
            "--text-tertiary: #9ca3af",
            "--border-color: #262626",
            "--primary: #0098AC",
            "--primary-hover: #007A8C",
        ] {
            assert!(css.contains(var), "missing {var}");
        }
        assert!(!css.contains("{bg_primary}"));
    }
}
