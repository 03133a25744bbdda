use force_panel::{Dimension, FigureSize};

#[test]
fn parses_pixel_and_percent_forms() {
    assert_eq!("800px".parse::<Dimension>().unwrap(), Dimension::Pixels(800.0));
    assert_eq!("100%".parse::<Dimension>().unwrap(), Dimension::Percent(100.0));
    assert_eq!(
        " 37.5% ".parse::<Dimension>().unwrap(),
        Dimension::Percent(37.5)
    );
    // Bare integers count as pixels.
    assert_eq!("640".parse::<Dimension>().unwrap(), Dimension::Pixels(640.0));
}

#[test]
fn rejects_malformed_dimensions() {
    assert!("wide".parse::<Dimension>().is_err());
    assert!("px".parse::<Dimension>().is_err());
    assert!("%".parse::<Dimension>().is_err());
    assert!("12pt".parse::<Dimension>().is_err());

    let err = "wide".parse::<Dimension>().unwrap_err();
    assert!(err.to_string().contains("'100%' or '100px'"));
}

#[test]
fn renders_in_the_engine_syntax() {
    assert_eq!(Dimension::pixels(800).to_string(), "800px");
    assert_eq!(Dimension::Percent(100.0).to_string(), "100%");
    assert_eq!(Dimension::fraction(0.5).to_string(), "50%");
}

#[test]
fn figure_size_defaults_to_full_width() {
    let size = FigureSize::default();
    assert_eq!(size.width, Dimension::Percent(100.0));
    assert_eq!(size.height, Dimension::Pixels(800.0));
}

#[test]
fn figure_size_parse_propagates_bad_input() {
    assert!(FigureSize::parse("100%", "800px").is_ok());
    assert!(FigureSize::parse("100%", "tall").is_err());
}
