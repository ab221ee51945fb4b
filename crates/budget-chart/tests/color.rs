// File: crates/budget-chart/tests/color.rs
// Purpose: Color string normalization and drawable conversion.

use budget_chart::color::{resolve, Color, ColorSpec};
use budget_chart::ChartError;

#[test]
fn short_hex_expands_to_long_hex() {
    assert_eq!(resolve("#abc").unwrap(), resolve("#aabbcc").unwrap());
    assert_eq!(resolve("#abc").unwrap(), Color::Hex("#aabbcc".into()));
    assert_eq!(resolve("#25AD60").unwrap(), Color::Hex("#25ad60".into()));
}

#[test]
fn rgb_yields_exact_fractions() {
    let c = resolve("rgb(37,173,96)").unwrap();
    assert_eq!(c, Color::Rgb(37.0 / 255.0, 173.0 / 255.0, 96.0 / 255.0));
    assert_eq!(resolve("rgb( 0 , 255 , 10 )").unwrap(), Color::Rgb(0.0, 1.0, 10.0 / 255.0));
}

#[test]
fn resolve_is_idempotent() {
    for spec in ["#abc", "rgb(1,2,3)", "white"] {
        let once = resolve(spec).unwrap();
        let twice = resolve(ColorSpec::from(once.clone())).unwrap();
        assert_eq!(once, twice, "{spec}");
    }
}

#[test]
fn other_strings_pass_through_as_named() {
    assert_eq!(resolve("white").unwrap(), Color::Named("white".into()));
    assert_eq!(resolve("not-a-color").unwrap(), Color::Named("not-a-color".into()));
}

#[test]
fn malformed_specs_are_rejected() {
    for bad in ["#abcd", "#ggg", "#", "rgb(1,2)", "rgb(1,2,3,4)", "rgb(a,b,c)", "rgb(256,0,0)", "rgb(-1,0,0)", "rgb(1.5,0,0)"] {
        let err = resolve(bad).unwrap_err();
        assert!(matches!(err, ChartError::InvalidColorFormat(_)), "{bad}: {err}");
    }
}

#[test]
fn to_skia_converts_every_form() {
    let green = resolve("#25ad60").unwrap().to_skia().unwrap();
    assert_eq!((green.a(), green.r(), green.g(), green.b()), (255, 0x25, 0xad, 0x60));

    let rgb = resolve("rgb(37,173,96)").unwrap().to_skia().unwrap();
    assert_eq!(rgb, green);

    let white = resolve("White").unwrap().to_skia().unwrap();
    assert_eq!((white.r(), white.g(), white.b()), (255, 255, 255));

    assert!(matches!(
        resolve("chartreuse-ish").unwrap().to_skia(),
        Err(ChartError::InvalidColorFormat(_))
    ));
}

#[test]
fn extended_css_names_are_drawable() {
    let cases = [
        ("gold", (255, 215, 0)),
        ("darkgreen", (0, 100, 0)),
        ("SteelBlue", (70, 130, 180)),
        ("rebeccapurple", (102, 51, 153)),
        ("lightgoldenrodyellow", (250, 250, 210)),
    ];
    for (name, (r, g, b)) in cases {
        let c = resolve(name).unwrap().to_skia().unwrap();
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, r, g, b), "{name}");
    }
}

#[test]
fn none_and_transparent_are_clear() {
    for name in ["none", "transparent"] {
        assert_eq!(resolve(name).unwrap().to_skia().unwrap().a(), 0, "{name}");
    }
}

#[test]
fn non_keyword_names_are_not_drawable() {
    for name in ["hsl(120, 50%, 50%)", "dark green", "tab:blue", ""] {
        assert!(
            matches!(resolve(name).unwrap().to_skia(), Err(ChartError::InvalidColorFormat(_))),
            "{name}"
        );
    }
}
