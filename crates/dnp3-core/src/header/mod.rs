//! Link-layer header: the typed control byte and the block 0 field view.

pub mod control;
pub mod view;
