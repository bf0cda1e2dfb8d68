mod key_maps;
mod step_plot;
mod text_input;

pub use key_maps::KeyId;
pub use key_maps::KeyMap;
pub use key_maps::KeyMapHelpBar;
pub use key_maps::KeyMaps;
pub use step_plot::StepPlot;
pub use text_input::TextInput;
pub use text_input::TextInputState;
