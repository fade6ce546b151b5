pub mod renderer;

pub use renderer::{Renderer, render_ascii};
