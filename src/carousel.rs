use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one image")]
    EmptyImageList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cyclic cursor over a fixed, non-empty list of image URLs.
///
/// The index is always a valid position in the list: stepping past either
/// end wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn new<I, S>(images: I) -> Result<Self, CarouselError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images = images.into_iter().map(Into::into).collect::<Vec<_>>();
        if images.is_empty() {
            return Err(CarouselError::EmptyImageList);
        }
        Ok(Self { images, index: 0 })
    }

    pub fn advance(&mut self) -> usize {
        debug_assert!(!self.images.is_empty());
        self.index = (self.index + 1) % self.images.len();
        self.index
    }

    pub fn retreat(&mut self) -> usize {
        debug_assert!(!self.images.is_empty());
        let len = self.images.len();
        self.index = (self.index + len - 1) % len;
        self.index
    }

    /// Jumps straight to `index`. Out of range positions are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.index = index;
        true
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    // never true, the constructor rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Single image cards are static: no arrows, no dots.
    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }
}

/// One independent carousel per project card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselDeck {
    cards: HashMap<ProjectId, Carousel>,
}

impl CarouselDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ProjectId, carousel: Carousel) -> Option<Carousel> {
        self.cards.insert(id, carousel)
    }

    pub fn get(&self, id: ProjectId) -> Option<&Carousel> {
        self.cards.get(&id)
    }

    pub fn index(&self, id: ProjectId) -> Option<usize> {
        self.cards.get(&id).map(Carousel::index)
    }

    pub fn advance(&mut self, id: ProjectId) -> Option<usize> {
        self.cards.get_mut(&id).map(Carousel::advance)
    }

    pub fn retreat(&mut self, id: ProjectId) -> Option<usize> {
        self.cards.get_mut(&id).map(Carousel::retreat)
    }

    pub fn go_to(&mut self, id: ProjectId, index: usize) -> Option<bool> {
        self.cards.get_mut(&id).map(|c| c.go_to(index))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<(ProjectId, Carousel)> for CarouselDeck {
    fn from_iter<T: IntoIterator<Item = (ProjectId, Carousel)>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
