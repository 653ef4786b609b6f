//! Static lookup assets (flag icons).

pub mod icons;
