// src/noyau/pile.rs
//
// Pile explicite (push/pop/peek) sur un Vec.
// Une pile neuve par appel : jamais partagée entre deux évaluations.

#[derive(Clone, Debug)]
pub struct Pile<T> {
    elems: Vec<T>,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pile<T> {
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            elems: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, x: T) {
        self.elems.push(x);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elems.pop()
    }

    /// Sommet, sans dépiler.
    pub fn peek(&self) -> Option<&T> {
        self.elems.last()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}
