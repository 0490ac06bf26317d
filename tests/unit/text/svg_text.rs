use super::*;
use crate::foundation::core::{Point, Rgba8};
use crate::text::glyph::TextAnchor;

fn run(text: &str) -> TextRun<'_> {
    TextRun {
        text,
        size_px: 24.0,
        origin: Point::new(4.0, 26.0),
        color: Rgba8::BLACK,
        anchor: TextAnchor::Start,
    }
}

#[test]
fn escape_covers_markup_characters() {
    assert_eq!(
        xml_escape(r#"a<b>&"c'"#),
        "a&lt;b&gt;&amp;&quot;c&apos;"
    );
}

#[test]
fn document_carries_run_attributes() {
    let r = SvgTextRasterizer::new(FontBook::empty());
    let mut tr = run("A&B");
    tr.color = Rgba8::new(255, 0, 16, 255);
    tr.anchor = TextAnchor::Middle;
    let svg = r.svg_document(60, 30, &tr);
    assert!(svg.contains(r#"width="60" height="30""#), "{svg}");
    assert!(svg.contains("fill=\"#ff0010\""), "{svg}");
    assert!(svg.contains(r#"text-anchor="middle""#), "{svg}");
    assert!(svg.contains(">A&amp;B</text>"), "{svg}");
    assert!(!svg.contains("font-family"), "{svg}");
}

#[test]
fn empty_text_is_a_noop_even_without_fonts() {
    let r = SvgTextRasterizer::new(FontBook::empty());
    let mut c = Canvas::new(10, 10).unwrap();
    r.draw_text(&mut c, &run("")).unwrap();
    assert!(c.data().iter().all(|&b| b == 0));
}

#[test]
fn missing_fonts_is_a_font_error() {
    let r = SvgTextRasterizer::new(FontBook::empty());
    let mut c = Canvas::new(10, 10).unwrap();
    let err = r.draw_text(&mut c, &run("x")).unwrap_err();
    assert!(matches!(err, PixgenError::Font(_)), "{err}");
}

#[test]
fn system_fonts_paint_something_when_available() {
    let fonts = FontBook::system();
    if fonts.face_count() == 0 {
        return;
    }
    let r = SvgTextRasterizer::new(fonts);
    let mut c = Canvas::new(64, 32).unwrap();
    r.draw_text(&mut c, &run("WM")).unwrap();
    assert!(c.data().chunks_exact(4).any(|px| px[3] > 0));
}

#[test]
fn document_is_well_formed_svg() {
    let r = SvgTextRasterizer::new(FontBook::empty());
    let mut tr = run(r#"<"quoted" & 'single'>"#);
    tr.color = Rgba8::new(1, 2, 3, 128);
    let svg = r.svg_document(40, 20, &tr);
    assert!(svg.starts_with("<svg "), "{svg}");
    assert!(svg.ends_with("</text></svg>"), "{svg}");
    assert!(svg.contains(r#"fill-opacity="0.5"#), "{svg}");
    usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
}

#[test]
fn measure_skips_empty_text_and_needs_fonts() {
    let r = SvgTextRasterizer::new(FontBook::empty());
    assert_eq!(r.measure(&run("")).unwrap(), None);
    let err = r.measure(&run("x")).unwrap_err();
    assert!(matches!(err, PixgenError::Font(_)), "{err}");
}

#[test]
fn system_fonts_measure_ink_around_the_baseline() {
    let fonts = FontBook::system();
    if fonts.face_count() == 0 {
        return;
    }
    let r = SvgTextRasterizer::new(fonts);
    let ink = r.measure(&run("Hg")).unwrap().unwrap();
    assert!(ink.y0 < 26.0 && ink.y1 > 26.0, "{ink:?}");
    assert!(ink.width() > 0.0 && ink.height() < 48.0, "{ink:?}");
}
