//! Earth layer: the three wonders and six ordinary stems dealt from the method palace.

use crate::ganzhi::Stem;
use crate::layer::Layer;
use crate::palace::Palace;
use crate::style::DunType;
use crate::topology::{CenterPolicy, Topology, walk};

/// Dealing order: the six ordinary (戊己庚辛壬癸) then the three wonders (丁丙乙).
pub const EARTH_SEQUENCE: [Stem; 9] = [
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Ding,
    Stem::Bing,
    Stem::Yi,
];

/// Deal [`EARTH_SEQUENCE`] over palaces 1-9 starting at palace `method`,
/// forward for yang dun and backward for yin dun.
///
/// `method` is nominally 1..=9; other values wrap around the nine palaces.
pub fn layout_earth(dun: DunType, method: u8) -> Layer<Stem> {
    let anchor = Palace::from_cycle(method as i32 - 1);
    walk(
        Topology::NineCycle,
        CenterPolicy::Direct,
        anchor,
        dun.direction(),
        &EARTH_SEQUENCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::ALL_PALACES;

    fn glyph_row(layer: &Layer<Stem>) -> Vec<Stem> {
        ALL_PALACES.iter().filter_map(|&p| layer.get(p)).collect()
    }

    #[test]
    fn yang_one_starts_at_kan() {
        let earth = layout_earth(DunType::Yang, 1);
        assert_eq!(glyph_row(&earth), EARTH_SEQUENCE.to_vec());
    }

    #[test]
    fn yang_four_starts_at_xun() {
        let earth = layout_earth(DunType::Yang, 4);
        assert_eq!(earth.get(Palace::Xun), Some(Stem::Wu));
        assert_eq!(earth.get(Palace::Center), Some(Stem::Ji));
        assert_eq!(earth.get(Palace::Zhen), Some(Stem::Yi));
    }

    #[test]
    fn yin_nine_walks_down() {
        let earth = layout_earth(DunType::Yin, 9);
        let expected = [
            (Palace::Li, Stem::Wu),
            (Palace::Gen, Stem::Ji),
            (Palace::Dui, Stem::Geng),
            (Palace::Qian, Stem::Xin),
            (Palace::Center, Stem::Ren),
            (Palace::Xun, Stem::Gui),
            (Palace::Zhen, Stem::Ding),
            (Palace::Kun, Stem::Bing),
            (Palace::Kan, Stem::Yi),
        ];
        for (p, s) in expected {
            assert_eq!(earth.get(p), Some(s), "palace {}", p.number());
        }
    }

    #[test]
    fn yin_one_wraps_to_li() {
        let earth = layout_earth(DunType::Yin, 1);
        assert_eq!(earth.get(Palace::Kan), Some(Stem::Wu));
        assert_eq!(earth.get(Palace::Li), Some(Stem::Ji));
    }

    #[test]
    fn every_method_is_a_bijection() {
        for dun in [DunType::Yang, DunType::Yin] {
            for method in 1..=9 {
                let earth = layout_earth(dun, method);
                assert_eq!(earth.len(), 9);
                for s in EARTH_SEQUENCE {
                    assert_eq!(
                        earth.occupied().filter(|&(_, v)| v == s).count(),
                        1,
                        "{dun} dun method {method} stem {:?}",
                        s
                    );
                }
            }
        }
    }
}
