mod camera;
mod component;
mod handle;
mod layout;
mod render;
mod state;

pub use component::TreeCanvas;
pub use handle::CanvasHandle;
