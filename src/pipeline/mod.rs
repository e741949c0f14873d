pub(crate) mod corners;
pub(crate) mod masked;
pub(crate) mod pixel;
