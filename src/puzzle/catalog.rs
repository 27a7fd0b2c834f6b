use thiserror::Error;

use super::types::Level;
use crate::cipher;
use crate::engine::normalize_answer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog contains no levels")]
    Empty,

    #[error("level ids must run 1, 2, 3, ... in file order: expected {expected}, found {found}")]
    NonSequentialId { expected: u32, found: u32 },

    #[error("level {id} has an empty solution")]
    EmptySolution { id: u32 },
}

/// The immutable, validated list of trials. Index `i` holds level id `i + 1`.
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Level>,
}

impl Catalog {
    pub fn new(mut levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, level) in levels.iter_mut().enumerate() {
            let expected = index as u32 + 1;
            if level.id != expected {
                return Err(CatalogError::NonSequentialId {
                    expected,
                    found: level.id,
                });
            }
            if normalize_answer(&level.solution).is_empty() {
                return Err(CatalogError::EmptySolution { id: level.id });
            }
            if level.prompt.trim().is_empty() {
                level.prompt = cipher::encode(&level.solution);
            }
        }

        Ok(Catalog { levels })
    }

    pub fn get(&self, id: u32) -> Option<&Level> {
        let index = (id as usize).checked_sub(1)?;
        self.levels.get(index)
    }

    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    pub fn last(&self) -> &Level {
        &self.levels[self.levels.len() - 1]
    }

    /// The id that follows `id`, if the catalog has one.
    pub fn next_id(&self, id: u32) -> Option<u32> {
        self.get(id + 1).map(|level| level.id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
