//! Per-tick context handed to every node.
//!
//! The context owns the current snapshot. Enemies are indexed by id as
//! positions into `game.units`, rebuilt on every tick, so no reference
//! outlives the snapshot it points into.

use std::collections::HashMap;

use game_core::{Constants, Game, Unit, UnitId, UnitOrder, WeaponProperties};

use crate::blackboard::Blackboard;

pub struct TickContext {
    /// Match rules received with `UpdateConstants`.
    pub constants: Constants,

    /// Snapshot for the current tick.
    pub game: Game,

    /// Copy of the controlled unit.
    pub me: Unit,

    enemies: HashMap<UnitId, usize>,

    /// Directive being built for the controlled unit.
    pub order: UnitOrder,

    pub blackboard: Blackboard,
}

impl TickContext {
    pub fn new(constants: Constants, blackboard: Blackboard) -> Self {
        Self {
            constants,
            game: Game::default(),
            me: Unit::default(),
            enemies: HashMap::new(),
            order: UnitOrder::default(),
            blackboard,
        }
    }

    /// Resets per-tick state and adopts `game`.
    ///
    /// Units owned by `game.my_id` are the controlled side; when several
    /// exist the last one is controlled. Every other unit is an enemy.
    /// Returns `false` if the snapshot has no controlled unit.
    pub fn begin(&mut self, game: Game) -> bool {
        self.enemies.clear();
        self.order = UnitOrder::default();
        self.blackboard.clear();
        self.game = game;

        let mut me = None;
        for (index, unit) in self.game.units.iter().enumerate() {
            if unit.player_id == self.game.my_id {
                me = Some(index);
            } else {
                self.enemies.insert(unit.id, index);
            }
        }

        match me.and_then(|index| self.game.units.get(index)) {
            Some(unit) => {
                self.me = unit.clone();
                true
            }
            None => false,
        }
    }

    /// Checked lookup into the enemy index.
    pub fn enemy(&self, id: UnitId) -> Option<&Unit> {
        self.enemies
            .get(&id)
            .and_then(|&index| self.game.units.get(index))
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.enemies
            .values()
            .filter_map(|&index| self.game.units.get(index))
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn max_speed(&self) -> f64 {
        self.constants.max_unit_forward_speed
    }

    /// Properties of the weapon the controlled unit holds.
    pub fn equipped_weapon(&self) -> Option<&WeaponProperties> {
        self.constants.weapon(self.me.weapon?)
    }
}
