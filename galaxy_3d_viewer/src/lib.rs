/*!
# Galaxy 3D Viewer

Scene façade for an interactive 3D viewer.

`ViewerScene` keeps a name-keyed registry of geometries on top of a
renderer-owned scene, switches each entry between a full-detail and a
downsampled fast proxy, and tracks the union of all registered bounds.

## Architecture

- **ViewerScene**: Registry, LOD switching, bounds, views, skybox and axes
- **Renderer / Scene / View**: Collaborator traits implemented by a backend
- **Geometry3D**: Shared read-only geometry (`PointCloud`, `TriangleMesh`)
- **Material**: Shader name, surface settings and typed parameters
- **Camera**: Passive view/projection data owned by a view

The crate ships no rendering backend. Hosts plug their own `Renderer` in.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod geometry;
pub mod material;
pub mod renderer;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Renderer collaborator traits
    pub use crate::renderer::{Renderer, Scene, View};

    // Scene façade
    pub use crate::scene::ViewerScene;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Render sub-module with handles, viewport and traits
    pub mod render {
        pub use crate::renderer::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Material sub-module
    pub mod material {
        pub use crate::material::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
