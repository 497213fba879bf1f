// Keyboard shortcut table. Pure so host tests can include it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleHint,
    ToggleMute,
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "h" | "H" => Some(KeyCommand::ToggleHint),
        "m" | "M" => Some(KeyCommand::ToggleMute),
        "Enter" => Some(KeyCommand::ToggleFullscreen),
        "Escape" => Some(KeyCommand::ExitFullscreen),
        _ => None,
    }
}

/// Shortcuts are ignored while a modifier is held so browser bindings keep working.
#[inline]
pub fn accepts_modifiers(ctrl: bool, meta: bool, alt: bool) -> bool {
    !(ctrl || meta || alt)
}
