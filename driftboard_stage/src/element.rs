// Copyright 2025 the Driftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

use driftboard_layout::float::FloatingElement;
use hashbrown::HashMap;
use kurbo::Point;

use crate::config::VisualConfig;
use crate::error::ConfigError;

/// Identifier of a canvas element, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Grouping tag shared by the elements of one project.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectId(Arc<str>);

impl ProjectId {
    /// Creates a project id.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Arc::from(tag))
    }

    /// The tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ProjectId {
    fn from(tag: String) -> Self {
        Self(Arc::from(tag))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the host knows about an element once its asset is ready.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementSpec {
    /// Element identifier.
    pub id: ElementId,
    /// Project the element belongs to.
    pub project: ProjectId,
}

impl ElementSpec {
    /// Creates a spec.
    #[must_use]
    pub fn new(id: u32, project: impl Into<ProjectId>) -> Self {
        Self {
            id: ElementId(id),
            project: project.into(),
        }
    }
}

/// Presentation attributes of an element, besides its position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementVisual {
    /// Stacking order.
    pub z_index: i32,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Width in world units.
    pub width: f64,
}

impl ElementVisual {
    pub(crate) fn resting(config: &VisualConfig) -> Self {
        Self {
            z_index: config.default_z,
            opacity: 1.0,
            width: config.default_width,
        }
    }
}

/// A canvas element: identity, motion, and presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) project: ProjectId,
    pub(crate) motion: FloatingElement,
    pub(crate) home: Point,
    pub(crate) visual: ElementVisual,
}

impl Element {
    /// Element identifier.
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Project the element belongs to.
    #[must_use]
    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    /// Drawn position in world space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.motion.position
    }

    /// Position assigned at startup; exiting a group returns the element here.
    #[must_use]
    pub fn home(&self) -> Point {
        self.home
    }

    /// Motion state.
    #[must_use]
    pub fn motion(&self) -> &FloatingElement {
        &self.motion
    }

    /// Whether the floating simulation currently owns this element.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.motion.floating
    }

    /// Presentation attributes.
    #[must_use]
    pub fn visual(&self) -> ElementVisual {
        self.visual
    }
}

/// Elements in host order, indexed by id.
#[derive(Clone, Debug, Default)]
pub(crate) struct Elements {
    items: Vec<Element>,
    index: HashMap<ElementId, usize>,
}

impl Elements {
    pub(crate) fn push(&mut self, element: Element) -> Result<(), ConfigError> {
        if self.index.contains_key(&element.id) {
            return Err(ConfigError::DuplicateElement(element.id));
        }
        self.index.insert(element.id, self.items.len());
        self.items.push(element);
        Ok(())
    }

    pub(crate) fn get(&self, id: ElementId) -> Option<&Element> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.index.get(&id).map(|&i| &mut self.items[i])
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Element> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, Element> {
        self.items.iter_mut()
    }

    /// Indices of the members of `project`, in host order.
    pub(crate) fn members(&self, project: &ProjectId) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, e)| &e.project == project)
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Element {
        &mut self.items[index]
    }
}
