pub mod body;
pub mod rocket;

pub use body::{Attachment, AttachmentKind, Body, BodyKind};
pub use rocket::{Orientation, RocketState};

/// Every orbiting body in the session. Filled once by the world builder,
/// then only mutated in place by the orbit updater.
#[derive(Debug, Clone, Default)]
pub struct WorldModel {
    bodies: Vec<Body>,
}

impl WorldModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn planet_count(&self) -> usize {
        self.bodies.iter().filter(|b| !b.is_minor()).count()
    }

    pub fn asteroid_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_minor()).count()
    }

    pub fn moon_count(&self) -> usize {
        self.bodies.iter().map(Body::moon_count).sum()
    }
}
