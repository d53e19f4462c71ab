pub(crate) mod headless;

use crate::foundation::core::{Affine, Point, Target};

/// The view properties the preset animations know how to change.
///
/// Implementors are handles onto a view owned elsewhere; every method takes `&self`.
pub trait View: Target {
    /// Set opacity in `[0, 1]`.
    fn set_alpha(&self, alpha: f64);

    /// Replace the view's transform.
    fn set_transform(&self, transform: Affine);

    /// Current center in the parent's coordinate space.
    fn center(&self) -> Point;

    /// Move the view so that its center is `center`.
    fn set_center(&self, center: Point);

    /// Show or hide the view.
    fn set_hidden(&self, hidden: bool);

    /// Stop every animation currently running on the view.
    fn remove_all_animations(&self);
}
