use crate::api::types::VisualId;

/// What a planet-attached visual is. Set at build time so the orbit
/// updater never has to inspect geometry to decide what moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// Orbits its parent.
    Moon,
    /// Rigidly attached ring system.
    Ring,
    /// Rigidly attached atmosphere shell.
    Atmosphere,
    /// Rigidly attached name label.
    Label,
}

/// A visual parented to a planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    visual: VisualId,
    kind: AttachmentKind,
    /// Distance from the parent, captured when the attachment was created.
    radius: f32,
}

impl Attachment {
    pub fn new(visual: VisualId, kind: AttachmentKind, radius: f32) -> Self {
        Self { visual, kind, radius }
    }

    pub fn moon(visual: VisualId, radius: f32) -> Self {
        Self::new(visual, AttachmentKind::Moon, radius)
    }

    pub fn rigid(visual: VisualId, kind: AttachmentKind) -> Self {
        Self::new(visual, kind, 0.0)
    }

    pub fn visual(&self) -> VisualId {
        self.visual
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_moon(&self) -> bool {
        self.kind == AttachmentKind::Moon
    }
}

/// Planets carry attachments; asteroids are bare.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    Planet { attachments: Vec<Attachment> },
    Asteroid,
}

/// A body on a circular orbit around the origin in the horizontal plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    visual: VisualId,
    orbit_radius: f32,
    /// Orbit speed before the orbit time scale is applied.
    pub orbit_speed: f32,
    /// Current orbit angle in radians. Unbounded.
    pub angle: f32,
    kind: BodyKind,
}

impl Body {
    pub fn planet(visual: VisualId, orbit_radius: f32, orbit_speed: f32, angle: f32) -> Self {
        Self {
            visual,
            orbit_radius: orbit_radius.max(0.0),
            orbit_speed,
            angle,
            kind: BodyKind::Planet { attachments: Vec::new() },
        }
    }

    pub fn asteroid(visual: VisualId, orbit_radius: f32, orbit_speed: f32, angle: f32) -> Self {
        Self {
            visual,
            orbit_radius: orbit_radius.max(0.0),
            orbit_speed,
            angle,
            kind: BodyKind::Asteroid,
        }
    }

    /// Attach a visual to a planet. Asteroids ignore attachments.
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attach(attachment);
        self
    }

    pub fn attach(&mut self, attachment: Attachment) {
        match &mut self.kind {
            BodyKind::Planet { attachments } => attachments.push(attachment),
            BodyKind::Asteroid => {
                log::warn!("attachment {:?} dropped: asteroids carry none", attachment.visual());
            }
        }
    }

    pub fn visual(&self) -> VisualId {
        self.visual
    }

    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    /// Asteroids are minor bodies.
    pub fn is_minor(&self) -> bool {
        matches!(self.kind, BodyKind::Asteroid)
    }

    /// Attachments in creation order. Empty for asteroids.
    pub fn attachments(&self) -> &[Attachment] {
        match &self.kind {
            BodyKind::Planet { attachments } => attachments,
            BodyKind::Asteroid => &[],
        }
    }

    /// Number of attachments that orbit.
    pub fn moon_count(&self) -> usize {
        self.attachments().iter().filter(|a| a.is_moon()).count()
    }
}
