use super::types::*;

#[test]
fn platform_modifier_is_cmd_only_on_mac() {
    assert_eq!(resolve_platform_modifier(Platform::MacOS), PlatformModifier::Cmd);
    assert_eq!(resolve_platform_modifier(Platform::Windows), PlatformModifier::Ctrl);
    assert_eq!(resolve_platform_modifier(Platform::Linux), PlatformModifier::Ctrl);
}

#[test]
fn descriptor_detection() {
    assert_eq!(Platform::from_descriptor("darwin"), Platform::MacOS);
    assert_eq!(Platform::from_descriptor("MacIntel"), Platform::MacOS);
    assert_eq!(Platform::from_descriptor("macos"), Platform::MacOS);
    assert_eq!(Platform::from_descriptor("win32"), Platform::Windows);
    assert_eq!(Platform::from_descriptor("Win64"), Platform::Windows);
    assert_eq!(Platform::from_descriptor("linux"), Platform::Linux);
    assert_eq!(Platform::from_descriptor("Linux x86_64"), Platform::Linux);
    assert_eq!(Platform::from_descriptor(""), Platform::Linux);
}

#[test]
fn canonical_prefix_order() {
    let all = Modifiers {
        cmd: true,
        ctrl: true,
        shift: true,
        alt: true,
    };
    assert_eq!(all.canonical_prefix(), "Cmd+Ctrl+Shift+Alt+");
    assert_eq!(Modifiers::default().canonical_prefix(), "");
}

#[test]
fn chord_canonical_uppercases_key() {
    let chord = Chord::new("s", Modifiers::primary(PlatformModifier::Ctrl).with_shift());
    assert_eq!(chord.canonical(), "Ctrl+Shift+S");
    assert_eq!(Chord::bare("F11").canonical(), "F11");
    assert_eq!(
        Chord::new("PageDown", Modifiers::primary(PlatformModifier::Cmd)).canonical(),
        "Cmd+PAGEDOWN"
    );
}

#[test]
fn line_feed_canonicalizes_to_enter() {
    assert_eq!(canonical_key("\n"), "ENTER");
    assert_eq!(canonical_key("Enter"), "ENTER");
    assert_eq!(canonical_key(","), ",");
}

#[test]
fn parse_basic_chords() {
    let chord = Chord::parse("cmd+shift+s").unwrap();
    assert!(chord.modifiers.cmd);
    assert!(chord.modifiers.shift);
    assert!(!chord.modifiers.ctrl);
    assert_eq!(chord.canonical(), "Cmd+Shift+S");

    assert_eq!(Chord::parse("Ctrl+PageDown").unwrap().canonical(), "Ctrl+PAGEDOWN");
    assert_eq!(Chord::parse("F11").unwrap().canonical(), "F11");
    assert_eq!(Chord::parse(" meta + option + 9 ").unwrap().canonical(), "Cmd+Alt+9");
}

#[test]
fn parse_plus_key() {
    assert_eq!(Chord::parse("ctrl++").unwrap().canonical(), "Ctrl++");
    assert_eq!(Chord::parse("+").unwrap().canonical(), "+");
}

#[test]
fn parse_errors() {
    assert_eq!(Chord::parse(""), Err(ChordParseError::Empty));
    assert_eq!(Chord::parse("   "), Err(ChordParseError::Empty));
    assert_eq!(Chord::parse("ctrl+shift"), Err(ChordParseError::MissingKey));
    assert_eq!(Chord::parse("ctrl+"), Err(ChordParseError::MissingKey));
    assert_eq!(
        Chord::parse("ctrl+a+b"),
        Err(ChordParseError::UnknownToken("b".to_string()))
    );
}

#[test]
fn chord_serializes_with_flags() {
    let chord = Chord::parse("cmd+ctrl+f").unwrap();
    let json = serde_json::to_string(&chord).unwrap();
    assert!(json.contains("\"key\":\"f\""));
    assert!(json.contains("\"cmd\":true"));
    assert!(json.contains("\"shift\":false"));
}
