use std::cell::Cell;

use svgpath_commands::compute_bound;
use svgpath_core::{Bound, Matrix};

use crate::render::{GroupContext, Renderer};
use crate::{Error, RenderProperties, SvgPath};

/// An ordered collection of paths sharing a transform and render properties.
///
/// Paths are drawn in insertion order. The group matrix is applied after the
/// matrix of each path, and the group render properties fill in whatever a
/// path leaves unset.
#[derive(Debug, Clone)]
pub struct SvgPathGroup {
    paths: Vec<SvgPath>,
    matrix: Matrix,
    render_properties: RenderProperties,

    bound: Cell<Bound>,
    is_updated: Cell<bool>,
}

impl Default for SvgPathGroup {
    fn default() -> Self {
        Self::with_paths(Vec::new())
    }
}

impl SvgPathGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(paths: Vec<SvgPath>) -> Self {
        Self {
            paths,
            matrix: Matrix::identity(),
            render_properties: RenderProperties::default(),
            bound: Cell::new(Bound::empty()),
            is_updated: Cell::new(true),
        }
    }

    /// Parses every entry of `data` into a path that inherits all of its
    /// render properties from the group.
    ///
    /// Fails on the first entry that does not parse.
    pub fn from_data<S: AsRef<str>>(data: &[S]) -> Result<Self, Error> {
        let paths = data
            .iter()
            .map(|d| SvgPath::with_properties(d.as_ref(), RenderProperties::inherit()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::with_paths(paths))
    }

    pub fn add(&mut self, path: SvgPath) {
        self.paths.push(path);
        self.mark_updated();
    }

    pub fn extend(&mut self, paths: impl IntoIterator<Item = SvgPath>) {
        self.paths.extend(paths);
        self.mark_updated();
    }

    /// Removes and returns the path at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<SvgPath> {
        if index >= self.paths.len() {
            return None;
        }

        self.mark_updated();
        Some(self.paths.remove(index))
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.mark_updated();
    }

    pub fn paths(&self) -> &[SvgPath] {
        &self.paths
    }

    /// Mutable access to a member. The group bound is recomputed on the next
    /// read.
    pub fn path_mut(&mut self, index: usize) -> Option<&mut SvgPath> {
        self.mark_updated();
        self.paths.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut Matrix {
        self.mark_updated();
        &mut self.matrix
    }

    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
        self.mark_updated();
    }

    pub fn render_properties(&self) -> &RenderProperties {
        &self.render_properties
    }

    pub fn render_properties_mut(&mut self) -> &mut RenderProperties {
        &mut self.render_properties
    }

    pub fn set_render_properties(&mut self, render_properties: RenderProperties) {
        self.render_properties = render_properties;
    }

    pub fn mark_updated(&self) {
        self.is_updated.set(true);
    }

    pub fn is_updated(&self) -> bool {
        self.is_updated.get()
    }

    /// The union of the bounds of all members, each computed with the group
    /// matrix applied after the member matrix.
    pub fn bound(&self) -> Bound {
        if self.is_updated.replace(false) {
            let bound = self.paths.iter().fold(Bound::empty(), |bound, path| {
                let matrix = Matrix::concat(&self.matrix, path.matrix());
                bound.union(&compute_bound(path.normalized_commands(), &matrix))
            });
            self.bound.set(bound);
        }
        self.bound.get()
    }

    /// Draws every member in order.
    pub fn draw(&self, renderer: &mut impl Renderer) {
        for path in &self.paths {
            path.draw(
                renderer,
                Some(GroupContext {
                    matrix: &self.matrix,
                    render_properties: &self.render_properties,
                }),
            );
        }
    }
}
