pub mod color_mode;
pub mod config;
pub mod fit_target;
pub mod params;
pub mod style;

pub use color_mode::ColorMode;
pub use config::RenderSettings;
pub use fit_target::FitTarget;
pub use params::RenderParams;
pub use style::Style;
