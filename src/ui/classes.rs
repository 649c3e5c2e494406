//! Tailwind class merging where a later utility overrides an earlier one
//! from the same group (`p-6` then `p-4` keeps only `p-4`).

use std::collections::HashSet;

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const DISPLAYS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "table",
    "hidden",
];
const FLEX_DIRECTIONS: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const PADDINGS: &[(&str, &str)] = &[
    ("p-", "p"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
];
const SIMPLE_PREFIXES: &[(&str, &str)] = &[
    ("items-", "align-items"),
    ("justify-", "justify-content"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("bg-", "bg-color"),
    ("w-", "w"),
    ("h-", "h"),
    ("size-", "size"),
    ("duration-", "duration"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
];

/// Joins class lists, dropping every class that a later one overrides.
///
/// Survivors keep their relative order. Utilities outside the known groups
/// are only deduplicated.
pub fn merge_classes(parts: &[&str]) -> String {
    let tokens: Vec<&str> = parts.iter().flat_map(|part| part.split_whitespace()).collect();

    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for token in tokens.into_iter().rev() {
        let parsed = ParsedClass::parse(token);
        let Some(group) = parsed.group else {
            if claimed.insert(format!("={token}")) {
                kept.push(token);
            }
            continue;
        };

        if !claimed.insert(parsed.key(group)) {
            continue;
        }
        for refinement in refinements(group) {
            claimed.insert(parsed.key(refinement));
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

struct ParsedClass {
    modifiers: String,
    important: bool,
    group: Option<&'static str>,
}

impl ParsedClass {
    fn parse(token: &str) -> Self {
        let (modifiers, utility) = split_modifiers(token);
        let (important, utility) = match utility.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, utility),
        };
        let utility = utility.strip_prefix('-').unwrap_or(utility);

        Self {
            modifiers,
            important,
            group: class_group(utility),
        }
    }

    fn key(&self, group: &str) -> String {
        let bang = if self.important { "!" } else { "" };
        format!("{}{bang}{group}", self.modifiers)
    }
}

/// Splits `dark:lg:p-4` into a normalized modifier prefix and `p-4`.
/// Colons inside arbitrary values (`bg-[url(a:b)]`) are not separators.
fn split_modifiers(token: &str) -> (String, &str) {
    let mut depth = 0usize;
    let mut last_colon = None;
    for (idx, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => last_colon = Some(idx),
            _ => {}
        }
    }

    match last_colon {
        Some(idx) => {
            let mut modifiers: Vec<&str> = token[..idx].split(':').collect();
            modifiers.sort_unstable();
            (format!("{}:", modifiers.join(":")), &token[idx + 1..])
        }
        None => (String::new(), token),
    }
}

fn class_group(utility: &str) -> Option<&'static str> {
    if FLEX_DIRECTIONS.contains(&utility) {
        return Some("flex-direction");
    }
    if DISPLAYS.contains(&utility) {
        return Some("display");
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(if FONT_SIZES.contains(&rest) {
            "font-size"
        } else if TEXT_ALIGNS.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if utility == "border" || utility.starts_with("border-") {
        return Some(border_group(utility));
    }
    if utility == "rounded" || utility.starts_with("rounded-") {
        return rounded_group(utility);
    }
    if utility == "shadow" || utility.starts_with("shadow-") {
        return Some("shadow");
    }
    if utility == "transition" || utility.starts_with("transition-") {
        return Some("transition");
    }
    if let Some((_, group)) = PADDINGS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
    {
        return Some(*group);
    }
    SIMPLE_PREFIXES
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

fn border_group(utility: &str) -> &'static str {
    let Some(rest) = utility.strip_prefix("border-") else {
        return "border-w";
    };
    if rest.chars().all(|ch| ch.is_ascii_digit()) {
        return "border-w";
    }
    if BORDER_STYLES.contains(&rest) {
        return "border-style";
    }

    let (side, width) = rest.split_once('-').unwrap_or((rest, ""));
    let width_ok = width.is_empty() || width.chars().all(|ch| ch.is_ascii_digit());
    match (side, width_ok) {
        ("x", true) => "border-w-x",
        ("y", true) => "border-w-y",
        ("t", true) => "border-w-t",
        ("r", true) => "border-w-r",
        ("b", true) => "border-w-b",
        ("l", true) => "border-w-l",
        _ => "border-color",
    }
}

fn rounded_group(utility: &str) -> Option<&'static str> {
    let rest = utility.strip_prefix("rounded-").unwrap_or("");
    let corner = rest.split('-').next().unwrap_or("");
    if ["t", "r", "b", "l", "tl", "tr", "br", "bl", "s", "e"].contains(&corner) {
        None
    } else {
        Some("rounded")
    }
}

/// Groups that a class from `group` also overrides.
fn refinements(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_padding_wins() {
        assert_eq!(merge_classes(&["p-6", "p-4"]), "p-4");
        assert_eq!(merge_classes(&["p-6 pt-0", "p-4"]), "p-4");
    }

    #[test]
    fn longhand_refines_earlier_shorthand() {
        assert_eq!(merge_classes(&["p-6", "pt-0"]), "p-6 pt-0");
        assert_eq!(merge_classes(&["p-6 pt-0", "pt-2"]), "p-6 pt-2");
    }

    #[test]
    fn modifiers_are_separate_groups() {
        assert_eq!(
            merge_classes(&["bg-red-50 dark:bg-red-950", "bg-blue-50"]),
            "dark:bg-red-950 bg-blue-50"
        );
        assert_eq!(
            merge_classes(&["dark:lg:p-2", "lg:dark:p-4"]),
            "lg:dark:p-4"
        );
    }

    #[test]
    fn text_size_and_color_do_not_collide() {
        assert_eq!(
            merge_classes(&["text-sm text-muted-foreground", "text-xs"]),
            "text-muted-foreground text-xs"
        );
        assert_eq!(
            merge_classes(&["text-2xl font-semibold", "text-base"]),
            "font-semibold text-base"
        );
    }

    #[test]
    fn border_width_and_color_do_not_collide() {
        assert_eq!(
            merge_classes(&["border border-red-200", "border-green-200"]),
            "border border-green-200"
        );
        assert_eq!(merge_classes(&["border-2", "border"]), "border");
    }

    #[test]
    fn header_overrides_collapse_direction_and_spacing() {
        let merged = merge_classes(&[
            "flex flex-col space-y-1.5 p-6",
            "flex flex-row items-center justify-between space-y-0 pb-2",
        ]);
        assert_eq!(
            merged,
            "p-6 flex flex-row items-center justify-between space-y-0 pb-2"
        );
    }

    #[test]
    fn unknown_classes_only_dedupe() {
        assert_eq!(
            merge_classes(&["metric-card custom", "custom other"]),
            "metric-card custom other"
        );
    }

    #[test]
    fn important_and_plain_are_distinct() {
        assert_eq!(merge_classes(&["!p-2", "p-4"]), "!p-2 p-4");
    }

    #[test]
    fn empty_parts_are_ignored() {
        assert_eq!(merge_classes(&["", "  ", "p-4"]), "p-4");
        assert_eq!(merge_classes(&[]), "");
    }
}
