//! The annotation collection owned by a viewer session.
//!
//! Insertion order is preserved and is the paint order: later entries are
//! painted over earlier ones. Entries are created only by a completed gesture
//! commit and are never mutated afterwards; the whole collection is discarded
//! when the document session closes.

use crate::types::{Annotation, AnnotationKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insertion-ordered collection of annotation records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
        }
    }

    /// Append a new annotation and return its generated id.
    pub fn add(&mut self, page: u32, position: (f32, f32), kind: AnnotationKind) -> String {
        let id = Uuid::new_v4().to_string();
        self.annotations.push(Annotation {
            id: id.clone(),
            page,
            position,
            kind,
        });
        id
    }

    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// All annotations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// Annotations belonging to `page`, in insertion order.
    pub fn for_page(&self, page: u32) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(move |a| a.page == page)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Drop every record. Used when the document session is discarded.
    pub fn clear(&mut self) {
        self.annotations.clear();
    }
}
