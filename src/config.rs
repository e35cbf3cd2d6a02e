/// Basin form endpoint. Builds can point somewhere else with
/// `BASIN_ENDPOINT=... trunk build`.
pub fn basin_endpoint() -> &'static str {
    endpoint_or_default(option_env!("BASIN_ENDPOINT"))
}

const DEFAULT_BASIN_ENDPOINT: &str = "https://usebasin.com/f/43f785c099d7";

fn endpoint_or_default(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(endpoint) if !endpoint.is_empty() => endpoint,
        _ => DEFAULT_BASIN_ENDPOINT,
    }
}

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// How long the "Message Sent!" panel stays before the form clears.
pub const RESET_DELAY_MS: u32 = 5_000;

pub const TOAST_DURATION_MS: u32 = 3_000;
pub const TOAST_LIMIT: usize = 3;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;

// Distance below the top of the viewport used to decide which section is current.
pub const NAV_MARKER_OFFSET_PX: f64 = 120.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_an_https_url() {
        assert!(basin_endpoint().starts_with("https://"));
    }

    #[test]
    fn unset_or_empty_override_falls_back_to_basin_form() {
        assert_eq!(endpoint_or_default(None), "https://usebasin.com/f/43f785c099d7");
        assert_eq!(endpoint_or_default(Some("")), "https://usebasin.com/f/43f785c099d7");
    }

    #[test]
    fn build_override_wins() {
        assert_eq!(
            endpoint_or_default(Some("https://usebasin.com/f/staging")),
            "https://usebasin.com/f/staging"
        );
    }

    #[test]
    fn toast_is_shorter_than_reset_delay() {
        assert!(TOAST_DURATION_MS < RESET_DELAY_MS);
    }
}
