//! Global State
//!
//! Read-only app context shared by every page, and the blocking browser
//! prompts pages use to report errors and confirm deletes.

use leptos::*;
use rust_decimal::Decimal;
use zenlife::grocery::Confirmation;
use zenlife::records::OrganizerResult;
use zenlife::seed::SeedResult;
use zenlife::summary::format_amount;
use zenlife::{Config, ConfigError};

const CONFIG_TOML: &str = include_str!("../../zenlife.toml");

/// Parse the configuration bundled into the binary
pub fn embedded_config() -> Result<Config, ConfigError> {
    Config::from_toml_str(CONFIG_TOML)
}

/// Context shared across the component tree
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: StoredValue<Config>,
}

/// Provide app state to the component tree
pub fn provide_app_state(config: Config) {
    provide_context(AppState {
        config: store_value(config),
    });
}

impl AppState {
    pub fn app_name(&self) -> String {
        self.config.with_value(|c| c.display.app_name.clone())
    }

    /// Amount with thousands separators and the configured currency symbol
    pub fn money(&self, amount: Decimal) -> String {
        self.config
            .with_value(|c| format_amount(amount, &c.display.currency_symbol))
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.config.with_value(|c| c.countdown.tick_interval_ms)
    }

    pub fn due_soon_days(&self) -> i64 {
        self.config.with_value(|c| c.countdown.due_soon_days)
    }
}

/// Use a seeded dataset, or an empty one if the embedded JSON is broken
pub fn seeded<T: Default>(result: SeedResult<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!("{}", e);
        T::default()
    })
}

/// Apply a fallible mutation to a copy of the signal's value.
///
/// On success the copy replaces the value; on error the user gets an alert
/// and the signal is left untouched.
pub fn commit<T, O>(
    signal: RwSignal<T>,
    mutation: impl FnOnce(&mut T) -> OrganizerResult<O>,
) -> Option<O>
where
    T: Clone + 'static,
{
    let mut next = signal.get_untracked();
    match mutation(&mut next) {
        Ok(output) => {
            signal.set(next);
            Some(output)
        }
        Err(e) => {
            alert(&e.to_string());
            None
        }
    }
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!("alert failed: {:?}", e);
    }
}

/// Blocking `window.confirm`; anything but an explicit OK counts as declined
pub fn confirm(message: &str) -> Confirmation {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = embedded_config().unwrap();
        assert_eq!(config.display.app_name, "ZenLife");
        assert_eq!(config.countdown.tick_interval_ms, 1000);
    }
}
