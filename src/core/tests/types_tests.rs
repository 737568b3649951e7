// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::core::types::{Key, Modifier, ShortcutCombo};
use crate::core::validator::ShortcutError;

#[test]
fn test_modifier_from_str() {
    assert_eq!("Ctrl".parse::<Modifier>(), Ok(Modifier::Ctrl));
    assert_eq!("Meta".parse::<Modifier>(), Ok(Modifier::Meta));
    assert_eq!(
        "ctrl".parse::<Modifier>(),
        Err(ShortcutError::InvalidModifier("ctrl".to_string()))
    );
}

#[test]
fn test_key_from_str() {
    assert_eq!("A".parse::<Key>(), Ok(Key::Character('A')));
    assert_eq!("7".parse::<Key>(), Ok(Key::Character('7')));
    assert_eq!("F10".parse::<Key>(), Ok(Key::Function(10)));
    assert_eq!("PageUp".parse::<Key>(), Ok(Key::PageUp));
    assert!("Return".parse::<Key>().is_err());
    assert!("AB".parse::<Key>().is_err());
    assert!("F99".parse::<Key>().is_err());
    assert_eq!("F".parse::<Key>(), Ok(Key::Character('F')));
}

#[test]
fn test_every_allowed_key_round_trips() {
    for key in Key::all() {
        assert_eq!(key.to_string().parse::<Key>(), Ok(key));
    }
}

#[test]
fn test_combo_normalisation() {
    // Order and duplicates don't matter
    let combo1 = ShortcutCombo::new(vec![Modifier::Meta, Modifier::Shift], Key::Character('Q'));
    let combo2 = ShortcutCombo::new(
        vec![Modifier::Shift, Modifier::Meta, Modifier::Shift],
        Key::Character('Q'),
    );

    assert_eq!(combo1, combo2);
    assert_eq!(combo1.modifiers, vec![Modifier::Shift, Modifier::Meta]);
}

#[test]
fn test_combo_display() {
    let combo = ShortcutCombo::new(vec![Modifier::Alt, Modifier::Ctrl], Key::Delete);
    assert_eq!(format!("{}", combo), "Ctrl+Alt+Delete");
}

#[test]
fn test_combo_json_shape() {
    let combo = ShortcutCombo::new(vec![Modifier::Ctrl], Key::Function(5));
    let json = serde_json::to_string(&combo).unwrap();

    assert_eq!(json, r#"{"modifiers":["Ctrl"],"key":"F5"}"#);
}

#[test]
fn test_combo_deserialise_normalises() {
    let json = r#"{"modifiers":["Shift","Ctrl","Shift"],"key":"Escape"}"#;
    let combo: ShortcutCombo = serde_json::from_str(json).unwrap();

    assert_eq!(combo, ShortcutCombo::new(vec![Modifier::Ctrl, Modifier::Shift], Key::Escape));
}

#[test]
fn test_deserialise_rejects_unknown_key() {
    let json = r#"{"modifiers":["Ctrl"],"key":"@"}"#;
    assert!(serde_json::from_str::<ShortcutCombo>(json).is_err());
}
