pub(crate) mod nullable;
pub mod text;
pub mod validation;
