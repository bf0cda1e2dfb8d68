mod bits_input;
mod command_line;
mod dialog;
mod plot_viewer;
mod root;
mod scheme_selector;

pub use bits_input::BitsInput;
pub use command_line::CommandLine;
pub use dialog::Dialog;
pub use dialog::Severity;
pub use plot_viewer::PlotViewer;
pub use root::Panel;
pub use root::Root;
pub use scheme_selector::SchemeSelector;
