//! Winit key name normalization.
//!
//! Converts winit's logical key names to the key names used in the
//! `[keybinds]` config section.

/// Convert a winit key name to the normalized string used by keybinds.
///
/// Winit uses names like `"ArrowUp"` and `" "` for space. Keybinds use
/// `"Up"` and `"Space"`. Single characters are upper-cased so `"w"` and
/// `"W"` bind the same control.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),

        " " => "Space".to_string(),
        "Esc" => "Escape".to_string(),

        // winit reports shifted characters on some layouts
        "+" => "=".to_string(),
        "_" => "-".to_string(),

        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys() {
        assert_eq!(normalize_winit_key("ArrowUp"), "Up");
        assert_eq!(normalize_winit_key("ArrowDown"), "Down");
        assert_eq!(normalize_winit_key("ArrowLeft"), "Left");
        assert_eq!(normalize_winit_key("ArrowRight"), "Right");
    }

    #[test]
    fn space_and_escape() {
        assert_eq!(normalize_winit_key(" "), "Space");
        assert_eq!(normalize_winit_key("Escape"), "Escape");
        assert_eq!(normalize_winit_key("Esc"), "Escape");
    }

    #[test]
    fn single_chars_uppercased() {
        assert_eq!(normalize_winit_key("w"), "W");
        assert_eq!(normalize_winit_key("q"), "Q");
        assert_eq!(normalize_winit_key("R"), "R");
    }

    #[test]
    fn grow_shrink_keys() {
        assert_eq!(normalize_winit_key("="), "=");
        assert_eq!(normalize_winit_key("+"), "=");
        assert_eq!(normalize_winit_key("-"), "-");
        assert_eq!(normalize_winit_key("_"), "-");
    }

    #[test]
    fn named_keys_passthrough() {
        assert_eq!(normalize_winit_key("F1"), "F1");
        assert_eq!(normalize_winit_key("Enter"), "Enter");
    }
}
