mod controller;
mod frame_loop;
mod settings;

pub use controller::{Hover, HoverTint, InteractionController, Mode};
pub use frame_loop::FrameLoop;
pub use settings::Settings;
