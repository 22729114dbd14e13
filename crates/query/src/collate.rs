//! Name collation.

use core::cmp::Ordering;

/// Compare product names the way a reader scans a list.
///
/// Case-folded characters decide first, so `apple` and `Banana` sort by
/// letter rather than by code point. On a case-insensitive tie the lowercase
/// form comes first (`apple` < `Apple`). No locale tables are consulted:
/// punctuation, digits and accented letters compare by code point after case
/// folding, so `Pea~` sorts after `Peas` and `Éclair` after `Fig`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_before_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zucchini", "apple"), Ordering::Greater);
    }

    #[test]
    fn lowercase_first_on_case_tie() {
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Pea", "Peas"), Ordering::Less);
        assert_eq!(compare_names("Peas", "Pumpkin"), Ordering::Less);
    }

    #[test]
    fn non_ascii_letters_and_punctuation_use_code_point() {
        assert_eq!(compare_names("Pea~", "Peas"), Ordering::Greater);
        assert_eq!(compare_names("Éclair", "Fig"), Ordering::Greater);
        assert_eq!(compare_names("éclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_names("Kale 2", "Kale a"), Ordering::Less);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(compare_names("Spinach", "Spinach"), Ordering::Equal);
        assert_eq!(compare_names("", ""), Ordering::Equal);
    }
}
