use serde::Deserialize;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";
pub const PLACEHOLDER_DESCRIPTION: &str = "Description not available";

/// One record as the API serves it. Only `name` is guaranteed.
#[derive(Clone, Debug, Deserialize)]
pub struct AnimalRecord {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,
}

/// What actually gets rendered: a record with every hole filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayCard {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl DisplayCard {
    /// Builds a card from a matched record, falling back to the
    /// searched term when the record carries no name, to a placeholder
    /// text when the description is missing or empty, and to a
    /// placeholder URI when the image is missing or blank.
    pub fn from_record(record: &AnimalRecord, searched_term: &str) -> Self {
        let name = if record.name.is_empty() {
            searched_term.to_string()
        } else {
            record.name.clone()
        };

        let description = record
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string());

        let image = record
            .image
            .clone()
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Self {
            name,
            description,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_passes_through_unchanged() {
        let record = AnimalRecord {
            name: "Lion".to_string(),
            description: Some("Big cat".to_string()),
            image: Some("https://example.com/lion.jpg".to_string()),
        };

        let card = DisplayCard::from_record(&record, "lion");

        assert_eq!(card.name, "Lion");
        assert_eq!(card.description, "Big cat");
        assert_eq!(card.image, "https://example.com/lion.jpg");
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let record = AnimalRecord {
            name: "Penguin".to_string(),
            description: None,
            image: None,
        };

        let card = DisplayCard::from_record(&record, "penguin");

        assert_eq!(card.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn blank_image_counts_as_missing() {
        let record = AnimalRecord {
            name: "Elephant".to_string(),
            description: Some("The largest land animal.".to_string()),
            image: Some("   ".to_string()),
        };

        let card = DisplayCard::from_record(&record, "elephant");

        assert_eq!(card.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn empty_name_falls_back_to_the_searched_term() {
        let record = AnimalRecord {
            name: String::new(),
            description: None,
            image: None,
        };

        let card = DisplayCard::from_record(&record, "okapi");

        assert_eq!(card.name, "okapi");
    }
}
