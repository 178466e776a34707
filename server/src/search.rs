//! # Search
//!
//! Query logic over loaded records. Pure and side-effect-free; all
//! I/O stays in the store.
use crate::store::Animal;

/// Keeps, in source order, the records whose name contains `term` as a
/// case-insensitive substring. An absent or empty term matches
/// everything.
pub fn filter(animals: Vec<Animal>, term: Option<&str>) -> Vec<Animal> {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return animals;
    };

    let term = term.to_lowercase();

    animals
        .into_iter()
        .filter(|animal| animal.name.to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoo() -> Vec<Animal> {
        ["Lion", "Tiger", "Sea Lion", "Elephant"]
            .into_iter()
            .map(|name| Animal {
                name: name.to_string(),
                description: None,
                image: None,
            })
            .collect()
    }

    fn names(animals: &[Animal]) -> Vec<&str> {
        animals.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn absent_term_returns_everything_in_order() {
        let result = filter(zoo(), None);

        assert_eq!(names(&result), ["Lion", "Tiger", "Sea Lion", "Elephant"]);
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let result = filter(zoo(), Some(""));

        assert_eq!(names(&result), ["Lion", "Tiger", "Sea Lion", "Elephant"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let result = filter(zoo(), Some("LION"));

        assert_eq!(names(&result), ["Lion", "Sea Lion"]);
    }

    #[test]
    fn match_is_a_substring_anywhere_in_the_name() {
        let result = filter(zoo(), Some("ige"));

        assert_eq!(names(&result), ["Tiger"]);
    }

    #[test]
    fn no_match_returns_empty() {
        let result = filter(zoo(), Some("zzz"));

        assert!(result.is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter(zoo(), Some("lion"));
        let twice = filter(once.clone(), Some("lion"));

        assert_eq!(names(&once), names(&twice));
    }
}
