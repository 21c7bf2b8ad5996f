pub mod pointer;
pub mod run;

pub use pointer::PointerInputState;
pub use run::RunGuiCommand;
