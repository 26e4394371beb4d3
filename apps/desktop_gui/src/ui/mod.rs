//! UI layer: the eframe app shell and the view model it renders.

pub mod app;
pub mod view_model;

pub use app::HeadcanonApp;
