use shadekit::utils::color::AccentColor;
use shadekit::WidgetError;

#[test]
fn test_palette_values() {
    assert_eq!(AccentColor::Blue.hex(), "#A7CBDA");
    assert_eq!(AccentColor::Beige.hex(), "#DCDCC9");
    assert_eq!(AccentColor::Orange.hex(), "#FA9133");
    assert_eq!(AccentColor::Pink.hex(), "#F9C8C5");
    assert_eq!(AccentColor::Yellow.hex(), "#F5C260");
    assert_eq!(AccentColor::Cyan.hex(), "#33DBF5");
}

#[test]
fn test_names_round_trip() {
    for color in AccentColor::ALL {
        assert_eq!(AccentColor::from_name(color.name()), Some(color));
        assert_eq!(color.to_string(), color.name());
    }
}

#[test]
fn test_from_str() {
    assert_eq!("YELLOW".parse::<AccentColor>(), Ok(AccentColor::Yellow));
    assert_eq!(
        "teal".parse::<AccentColor>(),
        Err(WidgetError::UnknownAccentColor("teal".to_string()))
    );
}

#[test]
fn test_default_is_blue() {
    assert_eq!(AccentColor::default(), AccentColor::Blue);
}
