//! Device and platform classification.
//!
//! Both values are computed once by the host (typically at startup) and
//! passed into the engine, which never inspects the environment itself.

use tabstrip_render::Size;

/// Screens with a height/width ratio below this are treated as tablets.
pub const TABLET_ASPECT_RATIO: f32 = 1.6;

/// Coarse device class used when the viewport has not been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// Tall, narrow screens.
    #[default]
    Phone,
    /// Screens closer to square.
    Tablet,
}

impl DeviceClass {
    /// Classify a device from its screen size.
    ///
    /// A screen without a measurable width is classified as a phone.
    pub fn from_screen(screen: Size) -> Self {
        match screen.aspect_ratio() {
            Some(ratio) if ratio < TABLET_ASPECT_RATIO => DeviceClass::Tablet,
            _ => DeviceClass::Phone,
        }
    }

    /// Returns true for tablet-like devices.
    #[inline]
    pub fn is_tablet(self) -> bool {
        self == DeviceClass::Tablet
    }
}

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Os {
    Ios,
    Android,
    #[default]
    Other,
}

/// The platform the tab bar is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Platform {
    /// Operating system family.
    pub os: Os,
    /// Major OS version, 0 when unknown.
    pub major_version: u32,
}

impl Platform {
    /// Create a platform description.
    pub const fn new(os: Os, major_version: u32) -> Self {
        Self { os, major_version }
    }

    /// An iOS platform with the given major version.
    pub const fn ios(major_version: u32) -> Self {
        Self::new(Os::Ios, major_version)
    }

    /// An Android platform with the given major version.
    pub const fn android(major_version: u32) -> Self {
        Self::new(Os::Android, major_version)
    }

    /// Returns true if the platform is iOS.
    #[inline]
    pub fn is_ios(&self) -> bool {
        self.os == Os::Ios
    }

    /// Whether adaptive tab layout is on by default.
    ///
    /// iOS 11 introduced side-by-side icon and label in compact bars.
    pub fn adaptive_by_default(&self) -> bool {
        self.is_ios() && self.major_version >= 11
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tablet_detection() {
        // 768x1024 iPad: ratio 1.33
        assert_eq!(DeviceClass::from_screen(Size::new(768.0, 1024.0)), DeviceClass::Tablet);
        // 375x812 phone: ratio 2.17
        assert_eq!(DeviceClass::from_screen(Size::new(375.0, 812.0)), DeviceClass::Phone);
        // Exactly at the threshold is not a tablet
        assert_eq!(DeviceClass::from_screen(Size::new(100.0, 160.0)), DeviceClass::Phone);
    }

    #[test]
    fn test_unmeasured_screen_is_phone() {
        assert_eq!(DeviceClass::from_screen(Size::ZERO), DeviceClass::Phone);
    }

    #[test]
    fn test_adaptive_default() {
        assert!(Platform::ios(11).adaptive_by_default());
        assert!(Platform::ios(17).adaptive_by_default());
        assert!(!Platform::ios(10).adaptive_by_default());
        assert!(!Platform::android(14).adaptive_by_default());
        assert!(!Platform::default().adaptive_by_default());
    }
}
