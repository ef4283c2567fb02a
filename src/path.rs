use std::cell::Cell;

use svgpath_commands::{
    absolutize, compute_bound, coordinates_of, normalize, parse, Command, CommandKind, Coordinates,
};
use svgpath_core::{Bound, Matrix};

use crate::render::{GroupContext, PathSink, Renderer};
use crate::{Error, RenderProperties};

/// A parsed SVG path together with its transform and render properties.
///
/// The three command lists are produced once in the constructor and never
/// change. To draw different path data, create a new `SvgPath`.
#[derive(Debug, Clone)]
pub struct SvgPath {
    data: String,
    initial_commands: Vec<Command>,
    absolutized_commands: Vec<Command>,
    normalized_commands: Vec<Command>,

    matrix: Matrix,
    render_properties: RenderProperties,
    saved_states: Vec<(Matrix, RenderProperties)>,

    bound: Cell<Bound>,
    is_updated: Cell<bool>,
}

impl SvgPath {
    /// Parses `data` with the default render properties and an identity
    /// matrix.
    pub fn new(data: impl Into<String>) -> Result<Self, Error> {
        Self::with_matrix(data, RenderProperties::default(), Matrix::identity())
    }

    pub fn with_properties(
        data: impl Into<String>,
        render_properties: RenderProperties,
    ) -> Result<Self, Error> {
        Self::with_matrix(data, render_properties, Matrix::identity())
    }

    pub fn with_matrix(
        data: impl Into<String>,
        render_properties: RenderProperties,
        matrix: Matrix,
    ) -> Result<Self, Error> {
        let data = data.into();

        let initial_commands = parse(&data)?;
        let absolutized_commands = absolutize(&initial_commands);
        let normalized_commands = normalize(&absolutized_commands);

        Ok(Self {
            data,
            initial_commands,
            absolutized_commands,
            normalized_commands,
            matrix,
            render_properties,
            saved_states: Vec::new(),
            bound: Cell::new(Bound::empty()),
            is_updated: Cell::new(true),
        })
    }

    /// The path data this path was parsed from.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn initial_commands(&self) -> &[Command] {
        &self.initial_commands
    }

    pub fn absolutized_commands(&self) -> &[Command] {
        &self.absolutized_commands
    }

    /// Only `MoveTo` and `CurveTo` commands.
    pub fn normalized_commands(&self) -> &[Command] {
        &self.normalized_commands
    }

    pub fn initial_coordinates(&self) -> Vec<&[f64]> {
        coordinates_of(&self.initial_commands)
    }

    pub fn absolutized_coordinates(&self) -> Vec<&[f64]> {
        coordinates_of(&self.absolutized_commands)
    }

    pub fn normalized_coordinates(&self) -> Vec<&[f64]> {
        coordinates_of(&self.normalized_commands)
    }

    /// The normalized coordinates mapped through `matrix`, or through the
    /// matrix of this path if `None`.
    pub fn transformed_coordinates(&self, matrix: Option<&Matrix>) -> Vec<Coordinates> {
        let matrix = matrix.unwrap_or(&self.matrix);
        self.normalized_commands
            .iter()
            .map(|c| c.transform(matrix))
            .collect()
    }

    /// Returns `true` if the last command of the path is a `Z`.
    pub fn is_closed(&self) -> bool {
        self.absolutized_commands
            .last()
            .is_some_and(|c| c.kind() == CommandKind::ClosePath)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Mutable access to the matrix. The bound is recomputed on the next call
    /// to [`SvgPath::bound`].
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

    /// Pushes the current matrix and render properties onto the state stack.
    pub fn save(&mut self) {
        self.saved_states.push((self.matrix, self.render_properties));
    }

    /// Pops the most recently saved state and makes it current.
    ///
    /// Returns `false` and leaves the path untouched if nothing was saved.
    pub fn restore(&mut self) -> bool {
        let Some((matrix, render_properties)) = self.saved_states.pop() else {
            log::warn!("restore called on an svg path with no saved state");
            return false;
        };

        self.matrix = matrix;
        self.render_properties = render_properties;
        self.mark_updated();
        true
    }

    /// The number of states saved with [`SvgPath::save`] and not yet restored.
    pub fn saved_state_count(&self) -> usize {
        self.saved_states.len()
    }

    /// Forces the bound to be recomputed on the next read.
    pub fn mark_updated(&self) {
        self.is_updated.set(true);
    }

    /// Returns `true` if the cached bound is stale.
    pub fn is_updated(&self) -> bool {
        self.is_updated.get()
    }

    /// The box around all normalized points after applying the matrix of this
    /// path. Empty paths have an empty bound.
    pub fn bound(&self) -> Bound {
        if self.is_updated.replace(false) {
            self.bound
                .set(compute_bound(&self.normalized_commands, &self.matrix));
        }
        self.bound.get()
    }

    /// Streams the normalized commands into `sink`, in path coordinates.
    pub fn emit(&self, sink: &mut impl PathSink) {
        for command in &self.normalized_commands {
            let c = command.coordinates();
            match command.kind() {
                CommandKind::MoveTo => sink.move_to((c[0], c[1]).into()),
                CommandKind::CurveTo => sink.cubic_to(
                    (c[0], c[1]).into(),
                    (c[2], c[3]).into(),
                    (c[4], c[5]).into(),
                ),
                _ => {}
            }
        }

        if self.is_closed() {
            sink.close();
        }
    }

    /// Hands this path to `renderer` with its full transform and resolved
    /// render properties.
    pub fn draw(&self, renderer: &mut impl Renderer, group: Option<GroupContext<'_>>) {
        let (transform, properties) = match group {
            Some(group) => (
                Matrix::concat(group.matrix, &self.matrix),
                self.render_properties.resolve(Some(group.render_properties)),
            ),
            None => (self.matrix, self.render_properties.resolve(None)),
        };

        renderer.draw_path(self, &transform, &properties);
    }
}
