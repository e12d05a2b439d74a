//! EmissionSystem: the owned, index-addressable pool of live entities

use crate::draw::DrawList;
use crate::entity::Entity;
use vanguard_core::Millis;

/// Ordered collection of live entities.
///
/// Order is stable within a frame so callers can collect indices during a
/// scan and remove them afterwards with [`EmissionSystem::remove_indices`].
#[derive(Debug, Clone, Default)]
pub struct EmissionSystem {
    entities: Vec<Entity>,
}

impl EmissionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove and return the entity at `index`, preserving the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Removing an index that is not live
    /// is a caller bug, not a recoverable condition.
    pub fn remove(&mut self, index: usize) -> Entity {
        self.entities.remove(index)
    }

    /// Remove a batch of indices collected during a scan.
    ///
    /// Indices are applied highest first so earlier removals never shift the
    /// ones still pending. Duplicates and out-of-range indices are ignored.
    /// Returns the number of entities removed.
    pub fn remove_indices(&mut self, indices: &[usize]) -> usize {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        let mut removed = 0;
        for index in sorted {
            if index < self.entities.len() {
                self.entities.remove(index);
                removed += 1;
            }
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Drop every entity whose finite lifespan has been exceeded at `now`.
    /// Returns how many were removed.
    pub fn update(&mut self, now: Millis) -> usize {
        self.update_with(now, |_| {})
    }

    /// Run `hook` on every entity, then drop the expired ones
    pub fn update_with(&mut self, now: Millis, mut hook: impl FnMut(&mut Entity)) -> usize {
        for entity in &mut self.entities {
            hook(entity);
        }

        let before = self.entities.len();
        self.entities.retain(|e| !e.is_expired(now));
        let removed = before - self.entities.len();
        if removed > 0 {
            log::debug!("expired {removed} entities at {now:.0} ms");
        }
        removed
    }

    pub fn draw(&self, list: &mut DrawList) {
        for entity in &self.entities {
            entity.draw(list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanguard_core::Lifespan;

    fn entity(name: &str, birthtime: Millis, lifespan: Lifespan) -> Entity {
        let mut e = Entity::new(name);
        e.birthtime = birthtime;
        e.lifespan = lifespan;
        e
    }

    #[test]
    fn add_and_remove_by_index() {
        let mut system = EmissionSystem::new();
        system.add(Entity::new("a"));
        system.add(Entity::new("b"));
        system.add(Entity::new("c"));

        let removed = system.remove(1);
        assert_eq!(removed.name, "b");
        assert_eq!(system.len(), 2);
        assert_eq!(system.entities()[1].name, "c");
    }

    #[test]
    #[should_panic]
    fn remove_out_of_range_panics() {
        let mut system = EmissionSystem::new();
        system.add(Entity::new("a"));
        system.remove(3);
    }

    #[test]
    fn remove_indices_is_order_independent() {
        let mut system = EmissionSystem::new();
        for name in ["a", "b", "c", "d", "e"] {
            system.add(Entity::new(name));
        }

        let removed = system.remove_indices(&[1, 3, 1, 9]);
        assert_eq!(removed, 2);
        let names: Vec<_> = system.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "c", "e"]);
    }

    #[test]
    fn expired_entities_are_gone_after_update() {
        let mut system = EmissionSystem::new();
        system.add(entity("short", 0.0, Lifespan::Finite(100.0)));
        system.add(entity("long", 0.0, Lifespan::Finite(5000.0)));
        system.add(entity("forever", 0.0, Lifespan::Infinite));

        assert_eq!(system.update(100.0), 0);
        assert_eq!(system.update(100.0 + 1e-3), 1);
        assert_eq!(system.len(), 2);
        assert!(system.iter().all(|e| e.name != "short"));

        system.update(1.0e9);
        assert_eq!(system.len(), 1);
        assert_eq!(system.entities()[0].name, "forever");
    }

    #[test]
    fn lifespan_holds_for_any_birthtime() {
        let mut system = EmissionSystem::new();
        for i in 0..20 {
            let born = i as Millis * 37.0;
            let life = 50.0 + i as Millis * 13.0;
            system.add(entity("e", born, Lifespan::Finite(life)));
        }

        for step in 0..100 {
            let now = step as Millis * 10.0;
            system.update(now);
            assert!(system.iter().all(|e| !e.is_expired(now)));
        }
    }

    #[test]
    fn update_with_runs_hook_on_every_entity() {
        let mut system = EmissionSystem::new();
        system.add(Entity::new("a"));
        system.add(Entity::new("b"));

        let mut seen = 0;
        system.update_with(0.0, |e| {
            e.set_selected(true);
            seen += 1;
        });
        assert_eq!(seen, 2);
        assert!(system.iter().all(|e| e.selected));
    }

    #[test]
    fn draw_emits_one_shape_per_entity() {
        let mut system = EmissionSystem::new();
        system.add(Entity::new("a"));
        system.add(Entity::new("b"));
        let mut list = DrawList::new();
        system.draw(&mut list);
        assert_eq!(list.shape_count(), 2);
    }
}
