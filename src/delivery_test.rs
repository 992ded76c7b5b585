// Unit tests for delivery mode parsing and key sequences

use fantoccini::key::Key;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_delivery_mode_from_str() {
    assert_eq!("paste".parse::<DeliveryMode>().unwrap(), DeliveryMode::Paste);
    assert_eq!("upload".parse::<DeliveryMode>().unwrap(), DeliveryMode::Upload);
    assert_eq!("auto".parse::<DeliveryMode>().unwrap(), DeliveryMode::Auto);
    assert_eq!("PASTE".parse::<DeliveryMode>().unwrap(), DeliveryMode::Paste);
    assert!("drag".parse::<DeliveryMode>().is_err());
}

#[test]
fn test_paste_chord_toggles_control_around_v() {
    let chord = paste_chord();
    let chars: Vec<char> = chord.chars().collect();
    assert_eq!(chars.len(), 3);
    assert_eq!(chars[0], char::from(Key::Control));
    assert_eq!(chars[1], 'v');
    // Trailing Control releases the modifier
    assert_eq!(chars[2], char::from(Key::Control));
}

#[test]
fn test_enter_key_is_single_commit_keystroke() {
    let key = enter_key();
    let chars: Vec<char> = key.chars().collect();
    assert_eq!(chars, vec![char::from(Key::Enter)]);
}

