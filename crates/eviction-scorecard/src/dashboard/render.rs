use super::detail::DetailPanel;
use super::map::{Cursor, MapScene};
use super::picker::PickerEntry;
use super::selection::SelectionState;
use super::theme::Theme;
use crate::geography::GeographySource;
use crate::scoring::{legend, Scorecard};
use std::fmt::Write as _;

const TITLE: &str = "Canadian Eviction Law Scorecard";

/// Inputs for one static frame of the dashboard.
pub struct Page<'a> {
    pub scorecard: &'a Scorecard,
    pub state: &'a SelectionState,
    pub scene: &'a MapScene,
    pub detail: Option<&'a DetailPanel>,
    pub picker: &'a [PickerEntry],
    pub source: &'a GeographySource,
    /// Free-form footer stamp, e.g. the data date.
    pub stamp: Option<&'a str>,
}

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(64 * 1024),
        }
    }

    fn push(&mut self, s: impl AsRef<str>) {
        self.buf.push_str(s.as_ref());
    }

    fn text(&mut self, s: &str) {
        self.buf.push_str(&escape(s));
    }

    fn finish(self) -> String {
        self.buf
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Map as a standalone SVG element. Output is byte-for-byte deterministic.
pub fn render_svg(scene: &MapScene, theme: &Theme) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"map\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" data-indicator=\"{indicator}\">",
        w = scene.width,
        h = scene.height,
        indicator = scene.indicator,
    );
    let _ = write!(
        svg,
        "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        scene.width, scene.height, theme.panel_background
    );
    let _ = write!(
        svg,
        "<g transform=\"{}\">",
        scene.transform.svg_attribute()
    );
    for shape in &scene.shapes {
        let style = &shape.style;
        let cursor = match style.cursor {
            Cursor::Pointer => "pointer",
            Cursor::Default => "default",
        };
        svg.push_str("<path");
        if let Some(region) = shape.region {
            let _ = write!(svg, " data-region=\"{region}\"");
        }
        if let Some(score) = shape.score {
            let _ = write!(svg, " data-score=\"{score}\"");
        }
        let _ = write!(
            svg,
            " d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\" style=\"cursor:{}\"",
            shape.path, style.fill, style.stroke, style.stroke_width, style.opacity, cursor
        );
        if let Some(name) = &shape.name {
            let _ = write!(svg, "><title>{}</title></path>", escape(name));
        } else {
            svg.push_str("/>");
        }
    }
    svg.push_str("</g></svg>");
    svg
}

pub fn render_page(page: &Page<'_>, theme: &Theme) -> String {
    let mut w = Html::new();
    w.push("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>");
    w.text(TITLE);
    w.push("</title><style>");
    w.push(stylesheet(theme));
    w.push("</style></head><body>");

    header(&mut w, page.scorecard);
    w.push("<main><aside class=\"indicators\"><h2>Indicators</h2><ul>");
    for indicator in page.scorecard.indicators() {
        let active = indicator.id == page.state.indicator();
        w.push(format!(
            "<li class=\"indicator{}\" data-indicator=\"{}\">",
            if active { " active" } else { "" },
            indicator.id
        ));
        w.text(indicator.name);
        w.push("</li>");
    }
    w.push("</ul></aside><section class=\"content\">");

    if let Some(indicator) = page.scorecard.indicator(page.state.indicator()) {
        w.push("<div class=\"card current\"><h2>");
        w.text(indicator.name);
        w.push("</h2><p>");
        w.text(indicator.description);
        w.push("</p></div>");
    }

    w.push("<div class=\"toolbar\"><span class=\"search\">Search: <q>");
    w.text(page.state.query());
    w.push(format!(
        "</q></span><span class=\"zoom\">zoom {:.2}</span></div>",
        page.state.viewport().zoom()
    ));

    w.push("<div class=\"card map-card\">");
    w.push(render_svg(page.scene, theme));
    w.push("<ul class=\"legend\">");
    for entry in legend() {
        w.push(format!(
            "<li><span class=\"swatch\" style=\"background:{}\"></span>{} &middot; ",
            entry.color, entry.score
        ));
        w.text(entry.label);
        w.push("</li>");
    }
    w.push("</ul></div>");

    if page.state.dropdown_open() {
        picker(&mut w, page.picker);
    }
    w.push("</section></main>");

    if page.state.dialog_open() {
        if let Some(detail) = page.detail {
            dialog(&mut w, detail);
        }
    }

    w.push("<footer>Boundaries: ");
    w.text(&page.source.to_string());
    if let Some(stamp) = page.stamp {
        w.push(" &middot; ");
        w.text(stamp);
    }
    w.push("</footer></body></html>\n");
    w.finish()
}

fn header(w: &mut Html, scorecard: &Scorecard) {
    w.push("<header><h1>");
    w.text(TITLE);
    w.push("</h1><nav class=\"resources\">");
    for resource in scorecard.resources() {
        w.push(format!("<a href=\"{}\" title=\"", escape(resource.path)));
        w.text(resource.description);
        w.push("\">");
        w.text(resource.title);
        w.push("</a>");
    }
    w.push("</nav></header>");
}

fn picker(w: &mut Html, entries: &[PickerEntry]) {
    w.push("<div class=\"card picker\"><h3>Select a province</h3><ul>");
    for entry in entries {
        w.push(format!(
            "<li data-region=\"{}\"><span class=\"badge\" style=\"background:{}\">{}</span>",
            entry.code, entry.color, entry.score
        ));
        w.text(entry.name);
        w.push("</li>");
    }
    w.push("</ul></div>");
}

fn dialog(w: &mut Html, detail: &DetailPanel) {
    w.push(format!(
        "<div class=\"dialog\" role=\"dialog\" data-region=\"{}\"><h2>",
        detail.region
    ));
    w.text(detail.region_name);
    w.push("</h2><div class=\"reading\"><h3>");
    w.text(detail.indicator_name);
    w.push(format!(
        "</h3><span class=\"badge\" style=\"background:{}\">{}/5</span> <strong>",
        detail.color, detail.score
    ));
    w.text(detail.level_label);
    w.push("</strong><p>");
    w.text(detail.explanation);
    w.push("</p></div>");

    if let Some(levels) = &detail.rubric {
        w.push("<div class=\"rubric\"><h3>Scoring scale</h3><ol>");
        for level in levels {
            w.push(format!(
                "<li class=\"level{}\" style=\"border-color:{}\"><strong>{} &middot; ",
                if level.active { " active" } else { "" },
                level.color,
                level.score
            ));
            w.text(level.label);
            w.push("</strong><dl>");
            for criterion in level.criteria {
                w.push("<dt>");
                w.text(criterion.label);
                w.push("</dt><dd>");
                w.text(criterion.text);
                w.push("</dd>");
            }
            w.push("</dl></li>");
        }
        w.push("</ol></div>");
    }

    w.push("<div class=\"all-scores\"><h3>All indicators</h3><ul>");
    for score in &detail.scores {
        w.push(format!(
            "<li class=\"score{}\" data-indicator=\"{}\"><span class=\"badge\" style=\"background:{}\">{}</span>",
            if score.current { " current" } else { "" },
            score.indicator,
            score.color,
            score.score
        ));
        w.text(score.name);
        w.push("</li>");
    }
    w.push("</ul></div>");

    if let Some(profile) = &detail.profile {
        w.push("<div class=\"profile\"><h3>General information</h3><dl><dt>Tribunal</dt><dd>");
        w.text(profile.tribunal);
        for (label, fact) in [("Onus to file", &profile.onus), ("Filing fee", &profile.fee)] {
            w.push("</dd><dt>");
            w.text(label);
            w.push("</dt><dd>");
            w.text(fact.short);
            w.push("<p>");
            w.text(fact.details);
            w.push("</p><cite>");
            w.text(fact.reference);
            w.push("</cite>");
        }
        w.push("</dd></dl><ul class=\"official\">");
        for link in &profile.links {
            w.push(format!("<li><a href=\"{}\">", escape(link.url)));
            w.text(link.label);
            w.push("</a></li>");
        }
        w.push("</ul></div>");
    }

    w.push("<nav class=\"resources\">");
    for resource in &detail.resources {
        w.push(format!("<a href=\"{}\">", escape(resource.path)));
        w.text(resource.title);
        w.push("</a>");
    }
    w.push("</nav></div>");
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        "body{{margin:0;font-family:system-ui,sans-serif;background:{bg};color:{text}}}\
header,footer{{padding:12px 24px;border-bottom:1px solid {border}}}\
footer{{color:{muted};font-size:12px}}\
main{{display:flex;gap:16px;padding:16px}}\
.card,.dialog{{background:{panel};border:1px solid {border};border-radius:8px;padding:12px;margin-bottom:12px}}\
.indicator.active,.score.current,.level.active{{background:{accent};color:{accent_text}}}\
.level{{border-left:4px solid}}\
.badge,.swatch{{display:inline-block;min-width:20px;padding:0 4px;margin-right:6px;color:#fff;border-radius:4px}}\
.resources a{{margin-right:12px;color:{accent}}}",
        bg = theme.page_background,
        text = theme.text,
        border = theme.border,
        muted = theme.muted_text,
        panel = theme.panel_background,
        accent = theme.accent,
        accent_text = theme.accent_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn stylesheet_follows_theme() {
        let dark = stylesheet(&Theme::dark());
        assert!(dark.contains(Theme::dark().page_background));
        assert!(!dark.contains(Theme::light().page_background));
    }
}
