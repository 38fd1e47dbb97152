//! Value objects - immutable types that represent domain concepts

mod slug;
mod viewer;

pub use slug::Slug;
pub use viewer::ViewerContext;
