//! Browser-specific viewport corrections
//!
//! Some browser/OS combinations report a viewport height that is larger than
//! what is actually visible. The popup's maximum height is reduced by a fixed
//! amount for those, but only when the popup grows downward.

use serde::{Deserialize, Serialize};

/// Browsers known to misreport the viewport height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadBrowser {
    #[default]
    None,
    IpadSafari,
    IpadChrome,
}

impl BadBrowser {
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "none" | "" => Some(BadBrowser::None),
            "ipad_safari" => Some(BadBrowser::IpadSafari),
            "ipad_chrome" => Some(BadBrowser::IpadChrome),
            _ => None,
        }
    }

    /// Pixels to subtract from the popup's maximum height
    pub fn correction_px(&self, corrections: &BrowserCorrections) -> f64 {
        match self {
            BadBrowser::None => 0.0,
            BadBrowser::IpadSafari => corrections.ipad_safari_px,
            BadBrowser::IpadChrome => corrections.ipad_chrome_px,
        }
    }
}

/// Correction amounts per known browser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserCorrections {
    pub ipad_safari_px: f64,
    pub ipad_chrome_px: f64,
}

impl Default for BrowserCorrections {
    fn default() -> Self {
        Self {
            ipad_safari_px: 40.0,
            ipad_chrome_px: 75.0,
        }
    }
}

impl BrowserCorrections {
    /// Reset negative or non-finite amounts to the defaults
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !is_valid(self.ipad_safari_px) {
            log::warn!("Resetting invalid ipad_safari_px {}", self.ipad_safari_px);
            self.ipad_safari_px = defaults.ipad_safari_px;
        }
        if !is_valid(self.ipad_chrome_px) {
            log::warn!("Resetting invalid ipad_chrome_px {}", self.ipad_chrome_px);
            self.ipad_chrome_px = defaults.ipad_chrome_px;
        }
    }
}

fn is_valid(px: f64) -> bool {
    px.is_finite() && px >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_px() {
        let corrections = BrowserCorrections::default();
        assert_eq!(BadBrowser::None.correction_px(&corrections), 0.0);
        assert_eq!(BadBrowser::IpadSafari.correction_px(&corrections), 40.0);
        assert_eq!(BadBrowser::IpadChrome.correction_px(&corrections), 75.0);
    }

    #[test]
    fn test_from_string() {
        assert_eq!(BadBrowser::from_string("ipad-safari"), Some(BadBrowser::IpadSafari));
        assert_eq!(BadBrowser::from_string("IPAD_CHROME"), Some(BadBrowser::IpadChrome));
        assert_eq!(BadBrowser::from_string("none"), Some(BadBrowser::None));
        assert_eq!(BadBrowser::from_string("netscape"), None);
    }

    #[test]
    fn test_sanitize() {
        let mut corrections = BrowserCorrections {
            ipad_safari_px: -1.0,
            ipad_chrome_px: 60.0,
        };
        corrections.sanitize();
        assert_eq!(corrections.ipad_safari_px, 40.0);
        assert_eq!(corrections.ipad_chrome_px, 60.0);
    }
}
