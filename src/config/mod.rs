mod browser;
mod correction;
mod metrics;
mod settings;

pub use browser::{BadBrowser, BrowserCorrections};
pub use correction::CoordinatesCorrection;
pub use metrics::LayoutMetrics;
pub use settings::Settings;
