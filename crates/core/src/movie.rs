//! Movie entity model and its input DTO.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// Authorship metadata, owned by exactly one [`Movie`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Director {
    pub firstname: String,
    pub lastname: String,
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// A movie record as held in the store and returned over the wire.
///
/// A missing director serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: MovieId,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

/// DTO decoded from create and update request bodies.
///
/// Every field is optional on the wire; omitted fields take their empty
/// value. Any `id` in the body is ignored because the server owns ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MovieInput {
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

impl MovieInput {
    /// Attach an id, producing a full record.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_director_serializes_as_null() {
        let movie = Movie {
            id: "1".into(),
            isbn: "438227".into(),
            title: "Movie One".into(),
            director: None,
        };

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["isbn"], "438227");
        assert_eq!(json["title"], "Movie One");
        assert!(json["director"].is_null());
    }

    #[test]
    fn input_with_partial_fields_defaults_the_rest() {
        let input: MovieInput = serde_json::from_str(r#"{"title":"Only Title"}"#).unwrap();
        assert_eq!(input.title, "Only Title");
        assert_eq!(input.isbn, "");
        assert_eq!(input.director, None);
    }

    #[test]
    fn input_ignores_client_supplied_id() {
        let input: MovieInput =
            serde_json::from_str(r#"{"id":"client","isbn":"X","title":"Y"}"#).unwrap();
        let movie = input.into_movie("server".into());
        assert_eq!(movie.id, "server");
        assert_eq!(movie.isbn, "X");
    }

    #[test]
    fn partial_director_defaults_missing_names() {
        let input: MovieInput =
            serde_json::from_str(r#"{"director":{"firstname":"A"}}"#).unwrap();
        assert_eq!(input.director, Some(Director::new("A", "")));
    }
}
