//! Scene model and animated entities:
//! - Node: a transform plus an optional mesh
//! - Transform: position, Euler rotation, scale
//! - Camera: perspective camera
//! - Scene: node and camera container
//! - CameraRig / AnimatedTriangle: per-entity animation state
//! - AnimatedScene: the scene wired to a timeline

pub mod animated;
pub mod camera;
pub mod node;
pub mod rig;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod transform;

pub use animated::AnimatedScene;
pub use camera::Camera;
pub use node::Node;
pub use rig::{AnimatedTriangle, CameraRig, OrientationState};
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeKey;
    pub struct CameraKey;
}
