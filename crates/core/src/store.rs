//! Ordered in-memory collection of movie records.
//!
//! Records live in a `Vec` in insertion order and every lookup is a linear
//! scan. Updates remove the matched record and re-append it, so a mutation
//! moves the touched record to the end of the list.

use crate::error::CoreError;
use crate::id::{IdGenerator, IdStrategy};
use crate::movie::{Director, Movie, MovieInput};

/// The record store. Not synchronized; callers wrap it in a lock.
#[derive(Debug, Clone)]
pub struct MovieStore {
    movies: Vec<Movie>,
    ids: IdGenerator,
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl MovieStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            movies: Vec::new(),
            ids: IdGenerator::new(strategy),
        }
    }

    /// Create a store pre-populated with the two sample movies.
    pub fn with_samples(strategy: IdStrategy) -> Self {
        let mut store = Self::new(strategy);
        store.create(MovieInput {
            isbn: "438227".into(),
            title: "Movie One".into(),
            director: Some(Director::new("John", "Doe")),
        });
        store.create(MovieInput {
            isbn: "45455".into(),
            title: "Movie Two".into(),
            director: Some(Director::new("Steve", "Smith")),
        });
        tracing::debug!(count = store.len(), "Seeded sample movies");
        store
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// First record whose id matches.
    pub fn find_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Like [`find_by_id`](Self::find_by_id) but reports absence as an error.
    pub fn get(&self, id: &str) -> Result<Movie, CoreError> {
        self.find_by_id(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Movie",
                id: id.to_string(),
            })
    }

    /// Append a record whose id the caller already assigned.
    pub fn insert(&mut self, movie: Movie) -> Movie {
        self.movies.push(movie.clone());
        movie
    }

    /// Assign a fresh id to `input` and append it.
    pub fn create(&mut self, input: MovieInput) -> Movie {
        let movies = &self.movies;
        let id = self.ids.next_id(|candidate| movies.iter().any(|m| m.id == candidate));
        self.insert(input.into_movie(id))
    }

    /// Remove the first record matching `id` and append `movie` under that id.
    ///
    /// When nothing matches, `movie` is still appended, so this behaves as an
    /// upsert that always leaves the record at the end of the list.
    pub fn replace_by_id(&mut self, id: &str, mut movie: Movie) -> Movie {
        if self.remove(id).is_none() {
            tracing::debug!(id, "Update target missing, appending as new record");
        }
        movie.id = id.to_string();
        self.insert(movie)
    }

    /// Remove the first record matching `id`. Returns it if one was removed.
    pub fn delete_by_id(&mut self, id: &str) -> Option<Movie> {
        self.remove(id)
    }

    fn remove(&mut self, id: &str) -> Option<Movie> {
        let index = self.movies.iter().position(|m| m.id == id)?;
        Some(self.movies.remove(index))
    }
}
