//! Typed per-tick blackboard.
//!
//! Every key named in a topology becomes a slot with a fixed [`PortType`].
//! Ports are resolved to [`SlotId`]s when the topology is loaded, so reads
//! and writes during a tick are plain vector indexing.

use std::marker::PhantomData;

use game_core::{UnitId, Vec2};

/// Value type carried by a port or blackboard slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum PortType {
    #[strum(serialize = "vector")]
    Vec2,
    #[strum(serialize = "unit id")]
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortValue {
    Vec2(Vec2),
    Id(UnitId),
}

impl PortValue {
    pub fn port_type(&self) -> PortType {
        match self {
            PortValue::Vec2(_) => PortType::Vec2,
            PortValue::Id(_) => PortType::Id,
        }
    }
}

/// Rust types that can flow through ports.
pub trait PortData: Copy + Send + Sync + 'static {
    const TYPE: PortType;

    fn into_value(self) -> PortValue;

    fn from_value(value: PortValue) -> Option<Self>;
}

impl PortData for Vec2 {
    const TYPE: PortType = PortType::Vec2;

    fn into_value(self) -> PortValue {
        PortValue::Vec2(self)
    }

    fn from_value(value: PortValue) -> Option<Self> {
        match value {
            PortValue::Vec2(v) => Some(v),
            _ => None,
        }
    }
}

impl PortData for UnitId {
    const TYPE: PortType = PortType::Id;

    fn into_value(self) -> PortValue {
        PortValue::Id(self)
    }

    fn from_value(value: PortValue) -> Option<Self> {
        match value {
            PortValue::Id(id) => Some(id),
            _ => None,
        }
    }
}

/// Index of a blackboard slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    port_type: PortType,
    value: Option<PortValue>,
}

#[derive(Debug, Clone, Default)]
pub struct Blackboard {
    slots: Vec<Slot>,
}

impl Blackboard {
    /// Creates a blackboard with one empty slot per `(key, type)` pair, in order.
    pub fn with_slots<'a>(slots: impl IntoIterator<Item = (&'a str, PortType)>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|(name, port_type)| Slot {
                    name: name.to_owned(),
                    port_type,
                    value: None,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, name: &str) -> Option<SlotId> {
        self.slots.iter().position(|s| s.name == name).map(SlotId)
    }

    pub fn slot_type(&self, slot: SlotId) -> Option<PortType> {
        self.slots.get(slot.0).map(|s| s.port_type)
    }

    /// Forgets every value. Called at the start of each tick.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.value = None;
        }
    }

    pub fn get<T: PortData>(&self, slot: SlotId) -> Option<T> {
        self.slots.get(slot.0)?.value.and_then(T::from_value)
    }

    /// Stores `value` in `slot`. Returns `false` if the slot does not exist
    /// or was declared with another type.
    pub fn set<T: PortData>(&mut self, slot: SlotId, value: T) -> bool {
        match self.slots.get_mut(slot.0) {
            Some(s) if s.port_type == T::TYPE => {
                s.value = Some(value.into_value());
                true
            }
            _ => false,
        }
    }

    /// Looks a value up by key name. Intended for diagnostics and tests.
    pub fn get_by_name<T: PortData>(&self, name: &str) -> Option<T> {
        self.get(self.slot(name)?)
    }
}

/// A resolved input port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputPort<T> {
    Unbound,
    Literal(T),
    Entry(SlotId),
}

impl<T: PortData> InputPort<T> {
    /// Current value, or `None` when unbound or the entry was not written this tick.
    pub fn get(&self, blackboard: &Blackboard) -> Option<T> {
        match self {
            InputPort::Unbound => None,
            InputPort::Literal(value) => Some(*value),
            InputPort::Entry(slot) => blackboard.get(*slot),
        }
    }
}

/// A resolved output port. Outputs can only be bound to blackboard entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputPort<T> {
    slot: Option<SlotId>,
    _marker: PhantomData<fn(T)>,
}

impl<T: PortData> OutputPort<T> {
    pub fn unbound() -> Self {
        Self {
            slot: None,
            _marker: PhantomData,
        }
    }

    pub fn entry(slot: SlotId) -> Self {
        Self {
            slot: Some(slot),
            _marker: PhantomData,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.slot.is_some()
    }

    /// Writes `value`. Returns `false` when the port is unbound.
    pub fn set(&self, blackboard: &mut Blackboard, value: T) -> bool {
        match self.slot {
            Some(slot) => blackboard.set(slot, value),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Blackboard {
        Blackboard::with_slots([("target", PortType::Id), ("escape", PortType::Vec2)])
    }

    #[test]
    fn values_are_typed() {
        let mut bb = board();
        let target = bb.slot("target").unwrap();

        assert!(bb.set(target, UnitId(4)));
        assert!(!bb.set(target, Vec2::new(1.0, 0.0)));
        assert_eq!(bb.get::<UnitId>(target), Some(UnitId(4)));
        assert_eq!(bb.get::<Vec2>(target), None);
    }

    #[test]
    fn clear_forgets_values_but_keeps_slots() {
        let mut bb = board();
        let escape = bb.slot("escape").unwrap();
        bb.set(escape, Vec2::new(0.0, 1.0));

        bb.clear();
        assert_eq!(bb.len(), 2);
        assert_eq!(bb.get::<Vec2>(escape), None);
        assert_eq!(bb.slot_type(escape), Some(PortType::Vec2));
    }

    #[test]
    fn ports_read_literals_and_entries() {
        let mut bb = board();
        let target = bb.slot("target").unwrap();

        let literal = InputPort::Literal(UnitId(9));
        let entry: InputPort<UnitId> = InputPort::Entry(target);
        let unbound: InputPort<UnitId> = InputPort::Unbound;

        assert_eq!(literal.get(&bb), Some(UnitId(9)));
        assert_eq!(entry.get(&bb), None);
        assert_eq!(unbound.get(&bb), None);

        assert!(OutputPort::entry(target).set(&mut bb, UnitId(2)));
        assert!(!OutputPort::<UnitId>::unbound().set(&mut bb, UnitId(3)));
        assert_eq!(entry.get(&bb), Some(UnitId(2)));
        assert_eq!(bb.get_by_name::<UnitId>("target"), Some(UnitId(2)));
    }

    #[test]
    fn port_type_names() {
        assert_eq!(PortType::Vec2.to_string(), "vector");
        assert_eq!(PortType::Id.to_string(), "unit id");
    }
}
