//! Card markup
//!
//! The preview and the exported PNG both come from this markup, so what the
//! user sees is what gets saved.

use chrono::NaiveDate;

use crate::config::CardConfig;
use crate::text::{escape_xml, format_membership_date};
use crate::types::FormState;

/// Card size in CSS pixels (max-w-md)
pub const CARD_WIDTH: u32 = 448;
pub const CARD_HEIGHT: u32 = 232;

const PADDING: u32 = 24;
const CORNER_RADIUS: u32 = 8;
const PHOTO_SIZE: u32 = 96;
const PHOTO_GAP: u32 = 16;
const ROW_TOP: u32 = 72;

const FONT_FAMILY: &str =
    "Inter, 'Helvetica Neue', Helvetica, Arial, 'DejaVu Sans', 'Liberation Sans', sans-serif";

/// Label before the branch line
pub const BRANCH_CAPTION: &str = "Cawangan";
/// Label before the date line
pub const DATE_CAPTION: &str = "Tarikh Mula Keahlian";

/// Render the card for `form` as it looks on `date`.
pub fn render_card_svg(form: &FormState, config: &CardConfig, date: NaiveDate) -> String {
    let (from, to) = form.theme.gradient();
    let center_x = CARD_WIDTH / 2;

    let mut svg = String::with_capacity(2048 + form.photo.as_ref().map_or(0, |p| p.as_str().len()));

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
        font = FONT_FAMILY,
    ));
    svg.push_str(&format!(
        r#"<defs><linearGradient id="card-bg" x1="0" y1="0" x2="1" y2="0"><stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/></linearGradient>"#
    ));

    let text_x = if form.photo.is_some() {
        PADDING + PHOTO_SIZE + PHOTO_GAP
    } else {
        PADDING
    };
    let radius = PHOTO_SIZE / 2;
    let photo_cx = PADDING + radius;
    let photo_cy = ROW_TOP + radius;

    if form.photo.is_some() {
        svg.push_str(&format!(
            r#"<clipPath id="photo-clip"><circle cx="{photo_cx}" cy="{photo_cy}" r="{radius}"/></clipPath>"#
        ));
    }
    svg.push_str("</defs>");

    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" rx="{CORNER_RADIUS}" fill="url(#card-bg)"/>"#
    ));

    svg.push_str(&format!(
        r#"<text x="{center_x}" y="52" text-anchor="middle" font-size="24" font-weight="700" fill="white">{}</text>"#,
        escape_xml(&config.organization)
    ));

    if let Some(photo) = &form.photo {
        svg.push_str(&format!(
            r#"<image x="{PADDING}" y="{ROW_TOP}" width="{PHOTO_SIZE}" height="{PHOTO_SIZE}" preserveAspectRatio="xMidYMid slice" clip-path="url(#photo-clip)" href="{}"/>"#,
            photo.as_str()
        ));
    }

    svg.push_str(&format!(
        r#"<text x="{text_x}" y="102" font-size="18" font-weight="600" fill="white">{}</text>"#,
        escape_xml(form.display_name())
    ));
    svg.push_str(&format!(
        r#"<text x="{text_x}" y="126" font-size="16" fill="white">{BRANCH_CAPTION}: {}</text>"#,
        escape_xml(&form.branch_label())
    ));
    svg.push_str(&format!(
        r#"<text x="{text_x}" y="150" font-size="16" fill="white">{DATE_CAPTION}: {}</text>"#,
        format_membership_date(date)
    ));

    svg.push_str(&format!(
        r#"<text x="{center_x}" y="204" text-anchor="middle" font-size="12" font-style="italic" fill="white">&quot;{}&quot;</text>"#,
        escape_xml(&config.tagline)
    ));

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Branch, PhotoDataUri, Theme};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_placeholders_when_empty() {
        let svg = render_card_svg(&FormState::new(), &CardConfig::default(), date());
        assert!(svg.contains(">Member Name<"));
        assert!(svg.contains("Cawangan: Not selected"));
        assert!(svg.contains("Tarikh Mula Keahlian: 05/01/2024"));
        assert!(svg.contains("Global Ikhwan Sdn Bhd"));
        assert!(svg.contains("&quot;Pasar Ikhwan di Putrajaya, siapakah dia Abuya&quot;"));
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn test_fields_are_mirrored() {
        let mut form = FormState::new();
        form.set_name("Siti");
        form.set_branch(Branch::CountryHomes);
        form.set_theme(Theme::Sunset);

        let svg = render_card_svg(&form, &CardConfig::default(), date());
        assert!(svg.contains(">Siti<"));
        assert!(svg.contains("Cawangan: Country-homes"));
        assert!(svg.contains("#f97316"));
        assert!(svg.contains("#ec4899"));
    }

    #[test]
    fn test_name_is_escaped() {
        let mut form = FormState::new();
        form.set_name("<script>&");
        let svg = render_card_svg(&form, &CardConfig::default(), date());
        assert!(svg.contains("&lt;script&gt;&amp;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn test_photo_shifts_text_column() {
        let mut form = FormState::new();
        form.photo = Some(PhotoDataUri::parse("data:image/png;base64,AAAA").unwrap());
        let svg = render_card_svg(&form, &CardConfig::default(), date());
        assert!(svg.contains(r#"href="data:image/png;base64,AAAA""#));
        assert!(svg.contains(r#"clip-path="url(#photo-clip)""#));
        assert!(svg.contains(r#"<text x="136" y="102""#));
    }
}
