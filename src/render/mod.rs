//! Software rendering of clip scenes.
//!
//! [`Canvas`] owns an ARGB8888 color buffer; [`Viewport`] maps clip-plane
//! coordinates onto it. Scenes are drawn by [`Scene::render`](crate::scene::Scene::render).

pub mod canvas;
pub mod viewport;

pub use canvas::Canvas;
pub use viewport::Viewport;
