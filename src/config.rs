/// Hostname suffix every scheduler message origin must end with.
pub const VENDOR_ORIGIN_SUFFIX: &str = "housecallpro.com";

/// HouseCall Pro embed credentials, as published in the page markup.
pub const HCP_ORGANIZATION: &str = "Fathers-Comfort-Handy-Man--HVAC";
pub const HCP_TOKEN: &str = "7e9db90da7914f2eb050897850a0d1db";

/// Hidden button the HCP embed script binds its own click handler to.
pub const HCP_HIDDEN_TRIGGER_ID: &str = "hcpHiddenTrigger";

pub const PHONE_DISPLAY: &str = "(555) 123-4822";
pub const PHONE_HREF: &str = "tel:(555)123-4822";

#[cfg(debug_assertions)]
pub fn tracking_debug() -> bool {
    true // verbose scheduler logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn tracking_debug() -> bool {
    false
}
