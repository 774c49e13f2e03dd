//! View-side helpers that sit between platform input and the update loop


pub use hit_test::{hit_test_panel, in_activation_band, HitTarget};
