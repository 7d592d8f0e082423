//! The diagram-rendering collaborator and its edit transaction.
//!
//! A host diagram exposes mutation calls plus begin/end markers for one
//! undo/redo step. [`EditScope`] is the only way the grid pipeline touches a
//! renderer: it opens the step on creation and rolls it back when dropped
//! without [`EditScope::commit`], so every early return leaves the diagram as
//! it was.

use log::{debug, warn};
use thiserror::Error;

use filegrid_core::geometry::Bounds;

use crate::label::Vertex;

/// Errors reported by a [`DiagramRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no edit transaction is open")]
    NoTransaction,

    #[error("an edit transaction is already open")]
    TransactionOpen,

    #[error("mutation rejected: {0}")]
    Rejected(String),
}

/// A diagram that can receive file vertices.
pub trait DiagramRenderer {
    /// Opens an edit transaction.
    fn begin_update(&mut self) -> Result<(), RenderError>;

    /// Commits the open transaction as a single undoable step.
    fn end_update(&mut self) -> Result<(), RenderError>;

    /// Discards every mutation made since [`begin_update`](Self::begin_update).
    fn rollback_update(&mut self);

    /// Inserts a rectangular vertex.
    fn insert_vertex(&mut self, vertex: Vertex) -> Result<(), RenderError>;

    /// Fits the view to the diagram contents and returns the fitted area,
    /// or `None` if the diagram is empty.
    fn fit(&mut self) -> Result<Option<Bounds>, RenderError>;
}

/// A scoped edit transaction on a [`DiagramRenderer`].
///
/// Dropping the scope without calling [`commit`](Self::commit) rolls the
/// transaction back.
pub struct EditScope<'a, R: DiagramRenderer + ?Sized> {
    renderer: &'a mut R,
    committed: bool,
}

impl<'a, R: DiagramRenderer + ?Sized> EditScope<'a, R> {
    /// Opens a transaction on `renderer`.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's refusal to open a transaction.
    pub fn begin(renderer: &'a mut R) -> Result<Self, RenderError> {
        renderer.begin_update()?;
        debug!("Edit transaction opened");
        Ok(Self {
            renderer,
            committed: false,
        })
    }

    pub fn insert_vertex(&mut self, vertex: Vertex) -> Result<(), RenderError> {
        self.renderer.insert_vertex(vertex)
    }

    pub fn fit(&mut self) -> Result<Option<Bounds>, RenderError> {
        self.renderer.fit()
    }

    /// Commits the transaction.
    ///
    /// If the renderer fails to commit, the transaction is rolled back when
    /// the scope is dropped at the end of this call.
    pub fn commit(mut self) -> Result<(), RenderError> {
        self.renderer.end_update()?;
        self.committed = true;
        debug!("Edit transaction committed");
        Ok(())
    }
}

impl<R: DiagramRenderer + ?Sized> Drop for EditScope<'_, R> {
    fn drop(&mut self) {
        if !self.committed {
            warn!("Rolling back edit transaction");
            self.renderer.rollback_update();
        }
    }
}

#[cfg(test)]
mod tests {
    use filegrid_core::{
        color::Color,
        file::{FileDescriptorBuilder, RawFileEntry},
        geometry::{Point, Size},
    };

    use super::*;
    use crate::label::{FileLabel, VertexStyle};

    /// Records every call it receives.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        fail_commit: bool,
    }

    impl DiagramRenderer for Recorder {
        fn begin_update(&mut self) -> Result<(), RenderError> {
            self.calls.push("begin");
            Ok(())
        }

        fn end_update(&mut self) -> Result<(), RenderError> {
            self.calls.push("end");
            if self.fail_commit {
                return Err(RenderError::Rejected("commit refused".to_string()));
            }
            Ok(())
        }

        fn rollback_update(&mut self) {
            self.calls.push("rollback");
        }

        fn insert_vertex(&mut self, _vertex: Vertex) -> Result<(), RenderError> {
            self.calls.push("insert");
            Ok(())
        }

        fn fit(&mut self) -> Result<Option<Bounds>, RenderError> {
            self.calls.push("fit");
            Ok(None)
        }
    }

    fn vertex() -> Vertex {
        let descriptor = FileDescriptorBuilder::default().build(&RawFileEntry::new("a.txt", 1, 0));
        Vertex::new(
            Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
            FileLabel::from(&descriptor),
            VertexStyle::new(Color::default(), Color::default()),
        )
    }

    #[test]
    fn test_commit_ends_update() {
        let mut recorder = Recorder::default();
        {
            let mut scope = EditScope::begin(&mut recorder).unwrap();
            scope.insert_vertex(vertex()).unwrap();
            scope.fit().unwrap();
            scope.commit().unwrap();
        }
        assert_eq!(recorder.calls, ["begin", "insert", "fit", "end"]);
    }

    #[test]
    fn test_drop_without_commit_rolls_back() {
        let mut recorder = Recorder::default();
        {
            let mut scope = EditScope::begin(&mut recorder).unwrap();
            scope.insert_vertex(vertex()).unwrap();
        }
        assert_eq!(recorder.calls, ["begin", "insert", "rollback"]);
    }

    #[test]
    fn test_failed_commit_rolls_back() {
        let mut recorder = Recorder {
            fail_commit: true,
            ..Recorder::default()
        };
        let result = EditScope::begin(&mut recorder).and_then(|scope| scope.commit());
        assert!(result.is_err());
        assert_eq!(recorder.calls, ["begin", "end", "rollback"]);
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut recorder = Recorder::default();
        let renderer: &mut dyn DiagramRenderer = &mut recorder;
        EditScope::begin(renderer).unwrap().commit().unwrap();
        assert_eq!(recorder.calls, ["begin", "end"]);
    }
}
