//! Traversal orders over the palaces and the rotation primitives shared by
//! all layer generators.
//!
//! A topology is a fixed cyclic sequence of palaces. Rotating a layer means
//! shifting every value along that sequence by the distance between two
//! seats; walking a sequence means dealing symbols out one palace per step
//! from an anchor. What happens to the center is decided per layer by a
//! [`CenterPolicy`].

use crate::layer::Layer;
use crate::palace::Palace;

/// Rotary ring: clockwise around the eight outer palaces starting at Kan.
const ROTARY_RING: [Palace; 8] = [
    Palace::Kan,
    Palace::Gen,
    Palace::Zhen,
    Palace::Xun,
    Palace::Li,
    Palace::Kun,
    Palace::Dui,
    Palace::Qian,
];

/// Luoshu numeric order 1..9, center included.
const NINE_CYCLE: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Center,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// Numeric order with the center skipped, used by flying gates.
const GATE_RING: [Palace; 8] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// Named traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// 1 → 8 → 3 → 4 → 9 → 2 → 7 → 6
    RotaryRing,
    /// 1 → 2 → ... → 9
    NineCycle,
    /// 1 → 2 → 3 → 4 → 6 → 7 → 8 → 9
    GateRing,
}

impl Topology {
    /// Palaces in traversal order.
    pub const fn palaces(self) -> &'static [Palace] {
        match self {
            Self::RotaryRing => &ROTARY_RING,
            Self::NineCycle => &NINE_CYCLE,
            Self::GateRing => &GATE_RING,
        }
    }

    /// Cycle length.
    pub const fn cycle_len(self) -> usize {
        self.palaces().len()
    }

    pub const fn contains_center(self) -> bool {
        matches!(self, Self::NineCycle)
    }

    /// Position of `palace` in the cycle. A palace the cycle cannot address
    /// (the center, on the rings) takes the seat of
    /// [`CENTER_HOST`](crate::palace::CENTER_HOST).
    pub fn seat(self, palace: Palace) -> usize {
        let palace = if self.contains_center() { palace } else { palace.lodged() };
        self.palaces()
            .iter()
            .position(|&p| p == palace)
            .unwrap_or(0)
    }

    /// Palace at a signed position, wrapped into the cycle.
    pub fn at(self, pos: i32) -> Palace {
        let palaces = self.palaces();
        palaces[pos.rem_euclid(palaces.len() as i32) as usize]
    }

    /// Palace reached by moving `steps` seats from `from` in `direction`.
    pub fn step(self, from: Palace, steps: i32, direction: Direction) -> Palace {
        self.at(self.seat(from) as i32 + direction.sign() * steps)
    }

    /// Forward distance in seats from `from` to `to`, in [0, len).
    pub fn offset(self, from: Palace, to: Palace) -> usize {
        (self.seat(to) as i32 - self.seat(from) as i32).rem_euclid(self.cycle_len() as i32) as usize
    }
}

/// Travel direction along a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// How a layer fills the center palace after rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CenterPolicy {
    /// The center repeats whatever the given palace received.
    MergeTo(Palace),
    /// The center stays empty.
    Empty,
    /// The center is a regular seat of the topology and is filled by the rotation.
    Direct,
}

impl CenterPolicy {
    fn apply<T: Copy>(self, layer: &mut Layer<T>) {
        match self {
            Self::MergeTo(host) => layer.set(Palace::Center, layer.get(host)),
            Self::Empty => layer.set(Palace::Center, None),
            Self::Direct => {}
        }
    }
}

/// Rotate the values of `source` along `topology` so that whatever sits in
/// `from` lands in `to`.
///
/// Every palace of the topology receives the source value found `offset`
/// seats behind it. Palaces outside the topology are left to `center`.
pub fn rotate<T, F>(
    topology: Topology,
    center: CenterPolicy,
    from: Palace,
    to: Palace,
    source: F,
) -> Layer<T>
where
    T: Copy,
    F: Fn(Palace) -> Option<T>,
{
    let offset = topology.offset(from, to) as i32;
    let mut layer = Layer::empty();
    for (i, &palace) in topology.palaces().iter().enumerate() {
        let origin = topology.at(i as i32 - offset);
        layer.set(palace, source(origin));
    }
    center.apply(&mut layer);
    layer
}

/// Deal `sequence` along `topology`, one palace per entry, starting at
/// `anchor` and moving in `direction`.
///
/// Entries past the cycle length are not seated.
pub fn walk<T: Copy>(
    topology: Topology,
    center: CenterPolicy,
    anchor: Palace,
    direction: Direction,
    sequence: &[T],
) -> Layer<T> {
    let mut layer = Layer::empty();
    for (k, &value) in sequence.iter().take(topology.cycle_len()).enumerate() {
        layer.set(topology.step(anchor, k as i32, direction), Some(value));
    }
    center.apply(&mut layer);
    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::{ALL_PALACES, CENTER_HOST};

    fn numbers(topology: Topology) -> Vec<u8> {
        topology.palaces().iter().map(|p| p.number()).collect()
    }

    #[test]
    fn named_orders() {
        assert_eq!(numbers(Topology::RotaryRing), vec![1, 8, 3, 4, 9, 2, 7, 6]);
        assert_eq!(numbers(Topology::NineCycle), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(numbers(Topology::GateRing), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn rings_seat_center_at_host() {
        assert_eq!(
            Topology::RotaryRing.seat(Palace::Center),
            Topology::RotaryRing.seat(CENTER_HOST)
        );
        assert_eq!(
            Topology::GateRing.seat(Palace::Center),
            Topology::GateRing.seat(CENTER_HOST)
        );
        assert_eq!(Topology::NineCycle.seat(Palace::Center), 4);
    }

    #[test]
    fn offset_normalizes_negative_distance() {
        // Kun sits at seat 5, Li at seat 4 on the rotary ring.
        assert_eq!(Topology::RotaryRing.offset(Palace::Kun, Palace::Li), 7);
        assert_eq!(Topology::NineCycle.offset(Palace::Gen, Palace::Kun), 3);
        assert_eq!(Topology::GateRing.offset(Palace::Gen, Palace::Qian), 6);
    }

    #[test]
    fn step_wraps_both_directions() {
        let t = Topology::NineCycle;
        assert_eq!(t.step(Palace::Gen, 2, Direction::Backward), Palace::Qian);
        assert_eq!(t.step(Palace::Kan, 11, Direction::Backward), Palace::Gen);
        assert_eq!(t.step(Palace::Li, 1, Direction::Forward), Palace::Kan);
    }

    #[test]
    fn rotate_by_zero_is_identity_on_cycle() {
        let layer = rotate(
            Topology::NineCycle,
            CenterPolicy::Direct,
            Palace::Dui,
            Palace::Dui,
            |p| Some(p.number()),
        );
        for p in ALL_PALACES {
            assert_eq!(layer.get(p), Some(p.number()));
        }
    }

    #[test]
    fn rotate_moves_from_onto_to() {
        for from in ALL_PALACES {
            for to in ALL_PALACES {
                let layer = rotate(
                    Topology::RotaryRing,
                    CenterPolicy::Empty,
                    from,
                    to,
                    |p| Some(p.number()),
                );
                assert_eq!(layer.get(to.lodged()), Some(from.lodged().number()));
                assert_eq!(layer.get(Palace::Center), None);
            }
        }
    }

    #[test]
    fn merge_copies_host() {
        let layer = rotate(
            Topology::RotaryRing,
            CenterPolicy::MergeTo(Palace::Kun),
            Palace::Kan,
            Palace::Gen,
            |p| Some(p.number()),
        );
        assert_eq!(layer.get(Palace::Center), layer.get(Palace::Kun));
        assert!(layer.get(Palace::Center).is_some());
    }

    #[test]
    fn walk_backward_from_anchor() {
        let layer = walk(
            Topology::RotaryRing,
            CenterPolicy::Empty,
            Palace::Li,
            Direction::Backward,
            &['a', 'b', 'c'],
        );
        assert_eq!(layer.get(Palace::Li), Some('a'));
        assert_eq!(layer.get(Palace::Xun), Some('b'));
        assert_eq!(layer.get(Palace::Zhen), Some('c'));
        assert_eq!(layer.len(), 3);
    }

    #[test]
    fn walk_drops_entries_past_cycle() {
        let seq: Vec<u8> = (0..12).collect();
        let layer = walk(
            Topology::NineCycle,
            CenterPolicy::Direct,
            Palace::Kan,
            Direction::Forward,
            &seq,
        );
        assert_eq!(layer.len(), 9);
        assert_eq!(layer.get(Palace::Li), Some(8));
        assert_eq!(layer.get(Palace::Kan), Some(0));
    }
}
