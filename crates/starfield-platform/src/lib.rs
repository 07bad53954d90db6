pub mod input;
pub mod pointer;
pub mod winit_keys;

pub use input::{apply_velocity_delta, Control, ControlMap, FrameInput, InputSettings, InputState};
pub use pointer::{displacement_from_center, displacement_to_rotation, window_center};
pub use winit_keys::normalize_winit_key;
