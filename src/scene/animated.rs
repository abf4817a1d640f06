use crate::animation::channel::{
    CameraChannel, CameraProperties, ChannelId, PropertyContainer, TriangleChannel,
    TriangleProperties,
};
use crate::animation::player::PropertySink;
use crate::animation::timeline::{Timeline, TimelineBuilder};
use crate::animation::values::PropertyValue;
use crate::assets::AnimationData;
use crate::errors::{Result, TesseraError};
use crate::resources::{Material, Mesh, create_triangle};
use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::rig::{AnimatedTriangle, CameraRig};
use crate::scene::scene::Scene;
use crate::settings::PlayerSettings;

/// The scene model plus the animated state of every entity in it.
///
/// Implements [`PropertySink`]: values produced by the player are stored in
/// the owning entity's property container and written through to the scene.
pub struct AnimatedScene {
    pub scene: Scene,
    camera: CameraRig,
    triangles: Vec<AnimatedTriangle>,
}

impl AnimatedScene {
    /// Creates the camera and one triangle per track, seeds every property
    /// from its first keyframe and builds the playback timeline.
    ///
    /// Seed values are applied to the scene before returning.
    pub fn build(data: &AnimationData, settings: &PlayerSettings) -> Result<(Self, Timeline)> {
        let mut scene = Scene::new();
        scene.set_background_hex(settings.view.clear_color);

        let camera = Camera::from_view(&settings.view);
        let initial_rotation = camera.transform.rotation;
        let camera_key = scene.add_camera(camera);
        let mut rig = CameraRig::new(camera_key, initial_rotation);

        let mut builder = TimelineBuilder::new(settings.frame_rate);
        builder.add_track(&mut rig.properties, &data.camera.frame_data, ChannelId::Camera)?;

        let mut triangles = Vec::with_capacity(data.triangles.len());
        for (index, track) in data.triangles.iter().enumerate() {
            if !(track.width.is_finite() && track.width > 0.0) {
                return Err(TesseraError::InvalidTriangle {
                    index,
                    width: track.width,
                });
            }

            let mesh = Mesh::new(create_triangle(track.width), Material::textured(&settings.image));
            let node = scene.add_node(Node::with_mesh(format!("triangle_{index}"), mesh));

            let mut triangle = AnimatedTriangle::new(node);
            builder.add_track(&mut triangle.properties, &track.frame_data, |c| {
                ChannelId::Triangle(index, c)
            })?;
            triangles.push(triangle);
        }

        let mut animated = Self {
            scene,
            camera: rig,
            triangles,
        };
        animated.apply_current()?;

        Ok((animated, builder.build()))
    }

    /// Writes every property's current value through to the scene, camera
    /// first (position, target, orientation), then each triangle.
    pub fn apply_current(&mut self) -> Result<()> {
        let camera = self
            .scene
            .cameras
            .get_mut(self.camera.camera)
            .ok_or_else(|| TesseraError::NodeMissing("camera".to_string()))?;
        for &channel in CameraProperties::CHANNELS {
            self.camera.update(camera, channel);
        }

        for (index, triangle) in self.triangles.iter().enumerate() {
            let node = self
                .scene
                .nodes
                .get_mut(triangle.node)
                .ok_or_else(|| TesseraError::NodeMissing(format!("triangle_{index}")))?;
            for &channel in TriangleProperties::CHANNELS {
                triangle.update(node, channel);
            }
        }
        Ok(())
    }

    /// Updates the camera aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(camera) = self.scene.camera_mut(self.camera.camera) {
            camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// The animated camera.
    ///
    /// # Panics
    /// Never in practice: the camera is created with the scene and never
    /// removed.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.scene.cameras[self.camera.camera]
    }

    #[must_use]
    pub fn camera_rig(&self) -> &CameraRig {
        &self.camera
    }

    #[must_use]
    pub fn triangles(&self) -> &[AnimatedTriangle] {
        &self.triangles
    }

    #[must_use]
    pub fn triangle_node(&self, index: usize) -> Option<&Node> {
        let triangle = self.triangles.get(index)?;
        self.scene.get_node(triangle.node)
    }

    fn apply_camera(&mut self, channel: CameraChannel, value: PropertyValue) {
        match self.scene.cameras.get_mut(self.camera.camera) {
            Some(camera) => self.camera.apply(camera, channel, value),
            None => log::warn!("Camera missing, dropping {channel:?} update"),
        }
    }

    fn apply_triangle(&mut self, index: usize, channel: TriangleChannel, value: PropertyValue) {
        let Some(triangle) = self.triangles.get_mut(index) else {
            log::warn!("No triangle {index}, dropping {channel:?} update");
            return;
        };
        match self.scene.nodes.get_mut(triangle.node) {
            Some(node) => triangle.apply(node, channel, value),
            None => log::warn!("Triangle {index} node missing, dropping {channel:?} update"),
        }
    }
}

impl PropertySink for AnimatedScene {
    fn apply(&mut self, channel: ChannelId, value: PropertyValue) {
        match channel {
            ChannelId::Camera(c) => self.apply_camera(c, value),
            ChannelId::Triangle(index, c) => self.apply_triangle(index, c, value),
        }
    }
}
