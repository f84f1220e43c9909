use log::Level;

/// Scroll offset past which the nav bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// A section counts as "in view" while its top edge sits inside this band.
pub const SPY_WINDOW_TOP_PX: f64 = 0.0;
pub const SPY_WINDOW_BOTTOM_PX: f64 = 300.0;

pub const CONTACT_EMAIL: &str = "ronaksankar216@gmail.com";

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spy_window_is_well_formed() {
        assert!(SPY_WINDOW_TOP_PX <= SPY_WINDOW_BOTTOM_PX);
        assert_eq!(SPY_WINDOW_BOTTOM_PX, 300.0);
        assert_eq!(SCROLLED_THRESHOLD_PX, 50.0);
    }

    #[test]
    fn mailto_points_at_contact_email() {
        assert_eq!(mailto(), "mailto:ronaksankar216@gmail.com");
    }
}
