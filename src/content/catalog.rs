//! Compiled-in workspace and settings tables.

use crate::types::{SettingEntry, SettingGroup, WorkspaceEntry};

pub static WORKSPACES: [WorkspaceEntry; 4] = [
    WorkspaceEntry {
        index: "1",
        name: "Browser",
        shortcut: "SUPER + 1",
        description: "Web browsing, research, and documentation",
    },
    WorkspaceEntry {
        index: "2",
        name: "Code",
        shortcut: "SUPER + 2",
        description: "VS Code, Cursor, and development tools",
    },
    WorkspaceEntry {
        index: "3",
        name: "Discord",
        shortcut: "SUPER + 3",
        description: "Communication and collaboration",
    },
    WorkspaceEntry {
        index: "4",
        name: "Music",
        shortcut: "SUPER + 4",
        description: "Spotify and media playback",
    },
];

static ENVIRONMENT: [SettingEntry; 4] = [
    SettingEntry { label: "Terminal", value: "Kitty" },
    SettingEntry { label: "Browser", value: "Google Chrome" },
    SettingEntry { label: "File Manager", value: "Nautilus" },
    SettingEntry { label: "Code Editor", value: "VS Code / Cursor" },
];

static APPEARANCE: [SettingEntry; 3] = [
    SettingEntry { label: "Theme", value: "Glass" },
    SettingEntry { label: "Color Scheme", value: "Material You (Dynamic)" },
    SettingEntry { label: "Font", value: "Fira Sans" },
];

/// Settings page groups, in display order.
pub static SETTING_GROUPS: [SettingGroup; 2] = [
    SettingGroup {
        title: "Environment",
        entries: &ENVIRONMENT,
    },
    SettingGroup {
        title: "Appearance",
        entries: &APPEARANCE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspaces_are_numbered_in_order() {
        for (i, ws) in WORKSPACES.iter().enumerate() {
            let n = (i + 1).to_string();
            assert_eq!(ws.index, n);
            assert_eq!(ws.shortcut, format!("SUPER + {n}"));
        }
    }

    #[test]
    fn setting_groups_keep_their_order() {
        let titles: Vec<_> = SETTING_GROUPS.iter().map(|g| g.title).collect();
        assert_eq!(titles, ["Environment", "Appearance"]);
        assert_eq!(SETTING_GROUPS[0].entries[0].value, "Kitty");
        assert_eq!(SETTING_GROUPS[1].entries.len(), 3);
    }
}
