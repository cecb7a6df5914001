//! Layer generators.
//!
//! Each generator is a pure function of the resolver output and the fixed
//! symbol tables; none reads another generator's result.
//!
//! | layer  | rotary                         | flying                        |
//! |--------|--------------------------------|-------------------------------|
//! | earth  | walk 1..9 from the method      | same                          |
//! | heaven | rotate ring, center = Kun      | rotate 1..9                   |
//! | stars  | rotate ring, center empty      | rotate 1..9                   |
//! | gates  | rotate ring, center empty      | rotate 1..9 minus 5           |
//! | deity  | walk ring, center empty        | walk 1..9                     |

mod deities;
mod earth;
mod gates;
mod heaven;
mod stars;

pub use deities::layout_deities;
pub use earth::{EARTH_SEQUENCE, layout_earth};
pub use gates::{duty_gate_target, layout_gates};
pub use heaven::layout_heaven;
pub use stars::layout_stars;
