/// Keyboard shortcut definitions for the help panel.
///
/// Almost every plain key press is consumed by the search input, so the
/// actual key dispatch lives in `handle_key_event` in main.rs; this module
/// only describes the bindings for display.

/// Shortcut key definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key_display: &'static str,
    pub description: &'static str,
}

/// Category of shortcuts
#[derive(Debug, Clone)]
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

/// Get all shortcut definitions organized by category
pub fn get_shortcuts() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Search",
            shortcuts: vec![
                Shortcut {
                    key_display: "a-z, 0-9, ...",
                    description: "Type to filter meals by name",
                },
                Shortcut {
                    key_display: "Backspace",
                    description: "Delete the last query character",
                },
                Shortcut {
                    key_display: "Esc",
                    description: "Clear the search query",
                },
            ],
        },
        ShortcutCategory {
            name: "Pagination",
            shortcuts: vec![
                Shortcut {
                    key_display: "→ or PgDn",
                    description: "Next page",
                },
                Shortcut {
                    key_display: "← or PgUp",
                    description: "Previous page",
                },
                Shortcut {
                    key_display: "Home",
                    description: "Jump to first page",
                },
                Shortcut {
                    key_display: "End",
                    description: "Jump to last page",
                },
            ],
        },
        ShortcutCategory {
            name: "Debug",
            shortcuts: vec![
                Shortcut {
                    key_display: "Ctrl+L",
                    description: "Toggle debug console",
                },
                Shortcut {
                    key_display: "j/k (console open)",
                    description: "Scroll debug console",
                },
                Shortcut {
                    key_display: "a (console open)",
                    description: "Toggle auto-scroll",
                },
                Shortcut {
                    key_display: "c (console open)",
                    description: "Clear debug logs",
                },
            ],
        },
        ShortcutCategory {
            name: "General",
            shortcuts: vec![
                Shortcut {
                    key_display: "Ctrl+H",
                    description: "Toggle this help",
                },
                Shortcut {
                    key_display: "Ctrl+C",
                    description: "Quit application",
                },
            ],
        },
    ]
}
