pub(crate) mod animator;
pub(crate) mod executor;
pub(crate) mod producer;
