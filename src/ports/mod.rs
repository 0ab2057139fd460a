//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the domain and implemented by adapters: remote
//! AI services behind [`MoveSource`], presentation layers behind
//! [`SessionObserver`].

pub mod move_source;
pub mod observer;

pub use move_source::MoveSource;
pub use observer::SessionObserver;
