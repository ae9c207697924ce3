use barroute::Category;

// Towns are written in lower case. Any name with an upper case letter, or without letters
// at all, is a village.
pub fn categorize(name: &str) -> Category {
    let mut cased = false;
    for c in name.chars() {
        if c.is_uppercase() {
            return Category::Village;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    if cased {
        Category::Town
    } else {
        Category::Village
    }
}

#[test]
fn test_lower_case_is_town() {
    assert_eq!(categorize("a"), Category::Town);
    assert_eq!(categorize("lisbon"), Category::Town);
    assert_eq!(categorize("north-2"), Category::Town);
}

#[test]
fn test_other_names_are_villages() {
    assert_eq!(categorize("A"), Category::Village);
    assert_eq!(categorize("Lisbon"), Category::Village);
    assert_eq!(categorize("nOrth"), Category::Village);
    assert_eq!(categorize("42"), Category::Village);
    assert_eq!(categorize(""), Category::Village);
}

#[test]
fn test_non_ascii_names() {
    assert_eq!(categorize("évora"), Category::Town);
    assert_eq!(categorize("Évora"), Category::Village);
}
