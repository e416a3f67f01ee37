pub mod controls;
pub mod status_panel;
pub mod toast;

pub use controls::{ConfigActions, FanCard, HeaterCard, LightsCard, PumpCard};
pub use status_panel::StatusPanel;
pub use toast::{ToastContainer, use_toasts};
