pub mod cursor;
pub mod pointer;

pub use cursor::{wire_cursor, CursorWiring};
pub use pointer::{wire_scene_pointer, ScenePointer};
