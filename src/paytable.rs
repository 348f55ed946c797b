//! Pay-table metadata derived from strategy filenames.
//!
//! Strategy files are named `strategy_<payload>.vpstrat2`. The payload uses
//! underscores as word separators and may embed digit groups naming the
//! pay-table variant, e.g. `strategy_jacks_or_better_9_6.vpstrat2`.

/// Filename prefix shared by all strategy files.
pub const STRATEGY_PREFIX: &str = "strategy_";

/// Filename extension shared by all strategy files.
pub const STRATEGY_EXT: &str = ".vpstrat2";

/// Known game families as (id prefix, family) pairs, checked in order.
///
/// Order matters: a family whose name is a prefix of another must come after
/// the more specific one, or `double-double-bonus-9-6` would classify as
/// `double-bonus`. Keep this list as a single ordered unit.
const FAMILIES: &[(&str, &str)] = &[
    ("double-double-bonus", "double-double-bonus"),
    ("triple-double-bonus", "triple-double-bonus"),
    ("super-double-double-bonus", "super-double-double-bonus"),
    ("super-double-bonus", "super-double-bonus"),
    ("super-aces", "super-aces"),
    ("double-bonus", "double-bonus"),
    ("bonus-poker-deluxe", "bonus-poker-deluxe"),
    ("bonus-poker", "bonus-poker"),
    ("jacks-or-better", "jacks-or-better"),
    ("deuces-wild", "deuces-wild"),
    ("joker-poker", "joker-poker"),
    ("aces-and-faces", "aces-and-faces"),
    ("tens-or-better", "tens-or-better"),
    ("all-american", "all-american"),
];

/// Convert a strategy filename to its pay-table id.
///
/// `strategy_jacks_or_better_9_6.vpstrat2` -> `jacks-or-better-9-6`
pub fn paytable_id(filename: &str) -> String {
    let stem = filename.strip_prefix(STRATEGY_PREFIX).unwrap_or(filename);
    let stem = stem.strip_suffix(STRATEGY_EXT).unwrap_or(stem);
    stem.replace('_', "-")
}

/// Determine the game family for a pay-table id.
///
/// Returns the first matching prefix from [`FAMILIES`], or `"other"` for
/// ids that belong to no known family.
pub fn game_family(id: &str) -> &'static str {
    FAMILIES
        .iter()
        .find(|(prefix, _)| id.starts_with(prefix))
        .map(|(_, family)| *family)
        .unwrap_or("other")
}

/// Format a pay-table id into a readable display name.
///
/// Word tokens are capitalized (connectives stay lowercase, a few fixed
/// abbreviations go uppercase); digit tokens become a trailing `9/6`-style
/// variant suffix.
pub fn display_name(id: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut numbers: Vec<&str> = Vec::new();

    for part in id.split('-') {
        if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            numbers.push(part);
            continue;
        }
        let word = match part {
            "or" | "and" => part.to_string(),
            "nsud" => "NSUD".to_string(),
            "db" => "DB".to_string(),
            "rf" => "RF".to_string(),
            _ => capitalize(part),
        };
        words.push(word);
    }

    let game_name = words.join(" ");
    if numbers.is_empty() {
        game_name
    } else {
        format!("{} {}", game_name, numbers.join("/"))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paytable_id_from_filename() {
        assert_eq!(
            paytable_id("strategy_jacks_or_better_9_6.vpstrat2"),
            "jacks-or-better-9-6"
        );
        assert_eq!(
            paytable_id("strategy_deuces_wild_nsud.vpstrat2"),
            "deuces-wild-nsud"
        );
    }

    #[test]
    fn test_paytable_id_malformed_names_pass_through() {
        // No validation: names missing the prefix or suffix still produce
        // an id rather than an error.
        assert_eq!(paytable_id("jacks_or_better.vpstrat2"), "jacks-or-better");
        assert_eq!(paytable_id("strategy_.vpstrat2"), "");
    }

    #[test]
    fn test_game_family_basic() {
        assert_eq!(game_family("jacks-or-better-9-6"), "jacks-or-better");
        assert_eq!(game_family("deuces-wild-nsud"), "deuces-wild");
        assert_eq!(game_family("all-american-1-1"), "all-american");
    }

    #[test]
    fn test_game_family_longest_prefix_wins() {
        // double-double-bonus is listed before double-bonus; reordering the
        // list would silently break this.
        assert_eq!(
            game_family("double-double-bonus-9-6"),
            "double-double-bonus"
        );
        assert_eq!(game_family("double-bonus-10-7"), "double-bonus");
        assert_eq!(
            game_family("super-double-double-bonus-8-5"),
            "super-double-double-bonus"
        );
        assert_eq!(game_family("super-double-bonus-6-5"), "super-double-bonus");
        assert_eq!(
            game_family("bonus-poker-deluxe-9-6"),
            "bonus-poker-deluxe"
        );
        assert_eq!(game_family("bonus-poker-8-5"), "bonus-poker");
    }

    #[test]
    fn test_game_family_fallback() {
        assert_eq!(game_family("pick-em-poker-9-6"), "other");
        assert_eq!(game_family(""), "other");
    }

    #[test]
    fn test_display_name_with_variant() {
        assert_eq!(display_name("jacks-or-better-9-6"), "Jacks or Better 9/6");
        assert_eq!(
            display_name("double-double-bonus-9-6"),
            "Double Double Bonus 9/6"
        );
    }

    #[test]
    fn test_display_name_without_variant() {
        // No digit tokens, no variant suffix and no trailing space.
        assert_eq!(display_name("deuces-wild"), "Deuces Wild");
    }

    #[test]
    fn test_display_name_abbreviations() {
        assert_eq!(display_name("deuces-wild-nsud"), "Deuces Wild NSUD");
        assert_eq!(display_name("db-rf-special"), "DB RF Special");
    }

    #[test]
    fn test_display_name_connectives_stay_lowercase() {
        assert_eq!(display_name("aces-and-faces-8-5"), "Aces and Faces 8/5");
        assert_eq!(display_name("tens-or-better-6-5"), "Tens or Better 6/5");
    }

    #[test]
    fn test_display_name_digit_order_preserved() {
        assert_eq!(display_name("joker-poker-7-5-3"), "Joker Poker 7/5/3");
    }
}
