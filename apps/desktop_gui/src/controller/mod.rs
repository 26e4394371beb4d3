//! Controller layer: UI events, form normalization, generation orchestration,
//! and the small widgets' state machines (FAQ accordion, anchor navigation).

pub mod anchors;
pub mod clipboard;
pub mod events;
pub mod faq;
pub mod form;
pub mod generator;
pub mod orchestration;
pub mod view;

pub use generator::HeadcanonController;
