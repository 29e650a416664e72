// Application layer - rendering use cases and the ports they depend on
pub mod cards;
pub mod container;
pub mod dashboard_controller;
pub mod formatter;
pub mod trends_source;
