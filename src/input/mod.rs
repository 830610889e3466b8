//! Button input: debouncing and gesture classification.
//!
//! Raw samples flow `Debouncer` → `GestureInterpreter`; the controller
//! consumes the resulting [`Gesture`] once per cycle.

pub mod debounce;
pub mod gesture;

pub use debounce::{Debouncer, StableEdge};
pub use gesture::{Gesture, GestureInterpreter};
