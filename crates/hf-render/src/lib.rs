pub mod mesh;
pub mod renderer;
pub mod shader;
pub mod texture;
pub mod uniforms;

mod tests;

pub use renderer::SceneRenderer;
