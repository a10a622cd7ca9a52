//! The post-bootstrap demo action.
//!
//! Once the environment checks out, the program performs one HTTP GET to
//! show the bootstrapped stack working. Network faults here are reported
//! and swallowed; the environment is already known good, so they must not
//! change the exit code.

use std::time::Duration;

use crate::ui::UserInterface;

/// Default URL for the demo request.
pub const DEFAULT_DEMO_URL: &str = "https://www.google.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Perform the demo GET and report the result.
///
/// Infallible by contract: every failure is printed, none propagate.
pub fn run_demo(ui: &mut dyn UserInterface, url: &str) {
    ui.message(&format!("Fetching {} ...", url));

    let client = match reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            ui.error(&format!("Could not build HTTP client: {}", e));
            return;
        }
    };

    match client.get(url).send() {
        Ok(response) => {
            ui.success(&format!(
                "Successfully connected to {}. Status code: {}",
                url,
                response.status().as_u16()
            ));
        }
        Err(e) => {
            ui.error(&format!("Request to {} failed: {}", url, e));
        }
    }
}
