pub(crate) mod path;
pub(crate) mod primitives;
pub mod transform;
