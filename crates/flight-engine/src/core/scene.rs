use crate::api::types::VisualId;
use crate::components::visual::Visual;

/// Flat storage for every visual the simulation writes to.
/// Sized for a solar system's worth of objects (hundreds, not millions).
pub struct Scene {
    visuals: Vec<Visual>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            visuals: Vec::with_capacity(512),
        }
    }

    /// Add a visual to the scene. A visual with an existing ID replaces it.
    pub fn spawn(&mut self, visual: Visual) {
        match self.visuals.binary_search_by_key(&visual.id, |v| v.id) {
            Ok(i) => self.visuals[i] = visual,
            Err(i) => self.visuals.insert(i, visual),
        }
    }

    /// Get a reference to a visual by ID.
    pub fn get(&self, id: VisualId) -> Option<&Visual> {
        self.index_of(id).map(|i| &self.visuals[i])
    }

    /// Get a mutable reference to a visual by ID.
    pub fn get_mut(&mut self, id: VisualId) -> Option<&mut Visual> {
        self.index_of(id).map(move |i| &mut self.visuals[i])
    }

    /// Iterate over all visuals in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Visual> {
        self.visuals.iter()
    }

    /// Find the first visual with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Visual> {
        self.visuals.iter().find(|v| v.tag == tag)
    }

    /// Number of visuals in the scene.
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    // `visuals` is kept sorted by id.
    fn index_of(&self, id: VisualId) -> Option<usize> {
        self.visuals.binary_search_by_key(&id, |v| v.id).ok()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        scene.spawn(Visual::new(VisualId(1)).with_pos(Vec3::new(10.0, 20.0, 30.0)));
        let v = scene.get(VisualId(1)).unwrap();
        assert_eq!(v.pos, Vec3::new(10.0, 20.0, 30.0));
        assert!(scene.get(VisualId(2)).is_none());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut scene = Scene::new();
        scene.spawn(Visual::new(VisualId(1)));
        scene.spawn(Visual::new(VisualId(2)));
        scene.get_mut(VisualId(2)).unwrap().scale = Vec3::splat(4.0);
        assert_eq!(scene.get(VisualId(2)).unwrap().scale, Vec3::splat(4.0));
        assert_eq!(scene.get(VisualId(1)).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn out_of_order_spawn_stays_sorted() {
        let mut scene = Scene::new();
        scene.spawn(Visual::new(VisualId(5)));
        scene.spawn(Visual::new(VisualId(2)));
        scene.spawn(Visual::new(VisualId(2)).with_tag("replaced"));
        let ids: Vec<_> = scene.iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![2, 5]);
        assert_eq!(scene.get(VisualId(2)).unwrap().tag, "replaced");
    }

    #[test]
    fn find_by_tag_returns_first_match() {
        let mut scene = Scene::new();
        scene.spawn(Visual::new(VisualId(1)).with_tag("Earth"));
        scene.spawn(Visual::new(VisualId(2)).with_tag("moon").with_parent(VisualId(1)));
        scene.spawn(Visual::new(VisualId(3)).with_tag("Mars"));
        scene.spawn(Visual::new(VisualId(4)).with_tag("moon").with_parent(VisualId(3)));
        assert_eq!(scene.find_by_tag("Mars").unwrap().id, VisualId(3));
        assert_eq!(scene.find_by_tag("moon").unwrap().id, VisualId(2));
        assert!(scene.find_by_tag("Venus").is_none());
    }
}
