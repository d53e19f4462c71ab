use std::sync::Arc;

use parking_lot::Mutex;

use crate::foundation::core::{Affine, Point};
use crate::view::View;

/// One recorded property write.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "property", content = "value", rename_all = "snake_case")]
pub enum PropertyChange {
    /// Opacity was set.
    Alpha(f64),
    /// Transform was replaced.
    Transform(Affine),
    /// Center was moved.
    Center(Point),
    /// Visibility was changed.
    Hidden(bool),
    /// Tag was set.
    Tag(i64),
    /// In-flight animations were removed.
    AnimationsRemoved,
}

/// Current properties of a [`HeadlessView`] plus every write made so far.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ViewState {
    /// Label used in logs and dumps.
    pub name: String,
    /// Opacity.
    pub alpha: f64,
    /// Transform.
    pub transform: Affine,
    /// Center.
    pub center: Point,
    /// Visibility.
    pub hidden: bool,
    /// Free-form integer tag.
    pub tag: i64,
    /// Writes in the order they happened.
    pub changes: Vec<PropertyChange>,
}

impl ViewState {
    fn new(name: String) -> Self {
        Self {
            name,
            alpha: 1.0,
            transform: Affine::IDENTITY,
            center: Point::ZERO,
            hidden: false,
            tag: 0,
            changes: Vec::new(),
        }
    }
}

/// An in-memory view that records every property change.
///
/// Clones are handles to the same view; equality is identity.
///
/// The change history is unbounded. Long-running or indefinite animations should call
/// [`HeadlessView::clear_history`] periodically, or the history keeps growing for as long as
/// the animation runs.
#[derive(Clone, Debug)]
pub struct HeadlessView {
    state: Arc<Mutex<ViewState>>,
}

impl Default for HeadlessView {
    fn default() -> Self {
        Self::new("view")
    }
}

impl PartialEq for HeadlessView {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for HeadlessView {}

impl HeadlessView {
    /// A fresh view with default properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ViewState::new(name.into()))),
        }
    }

    /// Place the view without recording a change.
    pub fn at(self, center: Point) -> Self {
        self.state.lock().center = center;
        self
    }

    /// Copy of the current state and history.
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().clone()
    }

    /// Label given at construction.
    pub fn name(&self) -> String {
        self.state.lock().name.clone()
    }

    /// Current opacity.
    pub fn alpha(&self) -> f64 {
        self.state.lock().alpha
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.state.lock().transform
    }

    /// Whether the view is hidden.
    pub fn is_hidden(&self) -> bool {
        self.state.lock().hidden
    }

    /// Current tag.
    pub fn tag(&self) -> i64 {
        self.state.lock().tag
    }

    /// Set the tag, recording the change.
    pub fn set_tag(&self, tag: i64) {
        let mut state = self.state.lock();
        state.tag = tag;
        state.changes.push(PropertyChange::Tag(tag));
    }

    /// Every write so far, oldest first.
    pub fn changes(&self) -> Vec<PropertyChange> {
        self.state.lock().changes.clone()
    }

    /// Forget recorded writes; current values are kept.
    pub fn clear_history(&self) {
        self.state.lock().changes.clear();
    }

    /// Opacity values written so far.
    pub fn alphas(&self) -> Vec<f64> {
        self.collect(|c| match c {
            PropertyChange::Alpha(a) => Some(*a),
            _ => None,
        })
    }

    /// Transforms written so far.
    pub fn transforms(&self) -> Vec<Affine> {
        self.collect(|c| match c {
            PropertyChange::Transform(t) => Some(*t),
            _ => None,
        })
    }

    /// Centers written so far.
    pub fn centers(&self) -> Vec<Point> {
        self.collect(|c| match c {
            PropertyChange::Center(p) => Some(*p),
            _ => None,
        })
    }

    /// Tags written so far.
    pub fn tags(&self) -> Vec<i64> {
        self.collect(|c| match c {
            PropertyChange::Tag(t) => Some(*t),
            _ => None,
        })
    }

    fn collect<V>(&self, pick: impl Fn(&PropertyChange) -> Option<V>) -> Vec<V> {
        self.state.lock().changes.iter().filter_map(pick).collect()
    }

    fn record(&self, apply: impl FnOnce(&mut ViewState) -> PropertyChange) {
        let mut state = self.state.lock();
        let change = apply(&mut *state);
        tracing::trace!(view = %state.name, ?change, "headless view: property changed");
        state.changes.push(change);
    }
}

impl View for HeadlessView {
    fn set_alpha(&self, alpha: f64) {
        self.record(|s| {
            s.alpha = alpha;
            PropertyChange::Alpha(alpha)
        });
    }

    fn set_transform(&self, transform: Affine) {
        self.record(|s| {
            s.transform = transform;
            PropertyChange::Transform(transform)
        });
    }

    fn center(&self) -> Point {
        self.state.lock().center
    }

    fn set_center(&self, center: Point) {
        self.record(|s| {
            s.center = center;
            PropertyChange::Center(center)
        });
    }

    fn set_hidden(&self, hidden: bool) {
        self.record(|s| {
            s.hidden = hidden;
            PropertyChange::Hidden(hidden)
        });
    }

    fn remove_all_animations(&self) {
        self.record(|_| PropertyChange::AnimationsRemoved);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/headless.rs"]
mod tests;
