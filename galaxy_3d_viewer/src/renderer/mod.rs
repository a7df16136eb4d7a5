/// Renderer module - collaborator traits the scene façade drives

// Module declarations
pub mod renderer;
#[cfg(test)]
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;
