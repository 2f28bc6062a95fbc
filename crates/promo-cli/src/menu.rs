//! Interactive menu: show the options and the previous report, run the
//! selected scenario, repeat until the user enters anything else.

use std::io::{BufRead, Write};

use promo_client::PromoClient;
use promo_core::{Credentials, KeyWarning};

use crate::scenario::Scenario;
use crate::session::run_scenario;

const BANNER: &str = "--------  Qixol Promo - Integration Sample  --------";

/// Full menu screen, with `last_result` shown beneath the options.
pub fn render_menu(last_result: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\n\n");
    for scenario in Scenario::ALL {
        out.push_str(&format!(" {}. {}\n", scenario.key(), scenario.label()));
    }
    out.push('\n');
    if !last_result.is_empty() {
        out.push_str(last_result);
        if !last_result.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(" Select an option... Or any other key to quit.\n");
    out
}

/// Guidance shown instead of the menu when keys are not configured.
pub fn render_config_warnings(warnings: &[KeyWarning]) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push_str("\n\n");
    for warning in warnings {
        out.push_str(warning.message());
        out.push_str("\n\n");
    }
    out.push_str(" Set the values in .env or the environment and run again.\n");
    out
}

/// Runs the menu loop until the input ends or an unrecognised key is read.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn run_menu<R, W>(
    client: &PromoClient,
    credentials: &Credentials,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut last_result = String::new();
    loop {
        write!(output, "{}", render_menu(&last_result))?;
        output.flush()?;

        let mut selection = String::new();
        if input.read_line(&mut selection)? == 0 {
            break;
        }
        let Some(scenario) = Scenario::from_selection(&selection) else {
            break;
        };

        let now = chrono::Utc::now().naive_utc();
        last_result = run_scenario(client, credentials, scenario, now).await;
    }
    tracing::debug!("menu closed");
    Ok(())
}
