pub(crate) mod anim;
pub(crate) mod function;
pub(crate) mod ops;
pub(crate) mod options;
pub mod presets;
