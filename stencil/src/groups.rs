//! Template group catalog and selection resolution.

/// A named bundle of top-level template paths for one editor or tool.
pub struct TemplateGroup {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Root-level names under the template source, copied verbatim into
    /// the project root.
    pub paths: &'static [&'static str],
}

/// Editor template groups, in menu order.
pub const GROUPS: &[TemplateGroup] = &[
    TemplateGroup {
        id: "cursor",
        display_name: "Cursor",
        paths: &[".cursor"],
    },
    TemplateGroup {
        id: "windsurf",
        display_name: "Windsurf",
        paths: &[".windsurf"],
    },
    TemplateGroup {
        id: "claude",
        display_name: "Claude Code",
        paths: &[".claude", "CLAUDE.md"],
    },
    TemplateGroup {
        id: "copilot",
        display_name: "GitHub Copilot",
        paths: &[".github"],
    },
];

/// Paths installed regardless of which groups are selected.
pub const COMMON_PATHS: &[&str] = &["AGENTS.md"];

/// Parse raw menu input into group indices (0-based, first-seen order).
///
/// Empty or whitespace-only input selects every group. Otherwise the input
/// is split on commas and each token is parsed as a 1-based index;
/// `group_count + 1` means "all of the above" and short-circuits to the
/// full set. Non-numeric and out-of-range tokens are ignored, duplicates
/// are coalesced. An empty result is a cancellation, handled by the caller.
pub fn parse_selection(input: &str, group_count: usize) -> Vec<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return (0..group_count).collect();
    }

    let mut selected: Vec<usize> = Vec::new();
    for token in trimmed.split(',') {
        let number: usize = match token.trim().parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if number == group_count + 1 {
            return (0..group_count).collect();
        }
        if number == 0 || number > group_count {
            continue;
        }
        let index = number - 1;
        if !selected.contains(&index) {
            selected.push(index);
        }
    }
    selected
}

/// Expand selected groups into the top-level paths to copy, always
/// including the common paths. Order follows the selection, duplicates
/// are dropped.
pub fn expand_selection(
    groups: &[TemplateGroup],
    common: &[&'static str],
    selection: &[usize],
) -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::new();
    for &index in selection {
        if let Some(group) = groups.get(index) {
            for &path in group.paths {
                if !paths.contains(&path) {
                    paths.push(path);
                }
            }
        }
    }
    for &path in common {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}
