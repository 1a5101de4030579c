// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options.
//!
//! [`Options`] is plain data with a [`Default`]. With the `serde` feature it can
//! be read from host configuration:
//!
//! ```json
//! { "open_trigger": "hover", "debounce_delay_ms": 250 }
//! ```

use core::time::Duration;

use crate::handler::DropdownHandler;
use crate::types::Region;

/// Delay applied to debounced open/close requests unless overridden.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(400);

/// How the menu is opened.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OpenTrigger {
    /// Activating the trigger toggles the menu.
    #[default]
    Click,
    /// Hovering the trigger opens the menu; leaving it closes the menu.
    /// Activation still toggles.
    Hover,
}

/// Tunables fixed for the lifetime of a dropdown.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    /// Activation mode.
    pub open_trigger: OpenTrigger,
    /// Quiet period before a debounced open/close commits.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "debounce_delay_ms", with = "millis")
    )]
    pub debounce_delay: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            open_trigger: OpenTrigger::Click,
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
        }
    }
}

impl Options {
    /// Default options: click trigger, [`DEFAULT_DEBOUNCE_DELAY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the activation mode.
    #[must_use]
    pub fn with_open_trigger(mut self, open_trigger: OpenTrigger) -> Self {
        self.open_trigger = open_trigger;
        self
    }

    /// Override the debounce delay.
    #[must_use]
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }
}

/// Everything needed to construct a [`Dropdown`](crate::dropdown::Dropdown).
#[derive(Clone, Debug)]
pub struct Config<K, H> {
    /// Elements to control.
    pub region: Region<K>,
    /// Activation mode and timing.
    pub options: Options,
    /// Receives open/close/select notifications.
    pub handler: H,
}

impl<K> Config<K, ()> {
    /// Config with default options and no callbacks.
    pub fn new(region: Region<K>) -> Self {
        Self {
            region,
            options: Options::default(),
            handler: (),
        }
    }
}

impl<K, H: DropdownHandler<K>> Config<K, H> {
    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace the handler.
    pub fn with_handler<H2: DropdownHandler<K>>(self, handler: H2) -> Config<K, H2> {
        Config {
            region: self.region,
            options: self.options,
            handler,
        }
    }
}

#[cfg(feature = "serde")]
mod millis {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_click_and_400ms() {
        let o = Options::default();
        assert_eq!(o.open_trigger, OpenTrigger::Click);
        assert_eq!(o.debounce_delay, Duration::from_millis(400));
    }

    #[test]
    fn builders_override_fields() {
        let o = Options::new()
            .with_open_trigger(OpenTrigger::Hover)
            .with_debounce_delay(Duration::from_millis(50));
        assert_eq!(o.open_trigger, OpenTrigger::Hover);
        assert_eq!(o.debounce_delay, Duration::from_millis(50));
    }

    #[test]
    fn config_keeps_region_when_swapping_handler() {
        let region = Region {
            root: 1_u32,
            trigger: 2,
            menu: 3,
        };
        let cfg = Config::new(region)
            .with_options(Options::new().with_open_trigger(OpenTrigger::Hover))
            .with_handler(crate::handler::Callbacks::new());
        assert_eq!(cfg.region, region);
        assert_eq!(cfg.options.open_trigger, OpenTrigger::Hover);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_json() {
        let json = r#"{ "open_trigger": "hover", "debounce_delay_ms": 250 }"#;
        let o: Options = serde_json::from_str(json).unwrap();
        assert_eq!(o.open_trigger, OpenTrigger::Hover);
        assert_eq!(o.debounce_delay, Duration::from_millis(250));

        let json = r#"{ "open_trigger": "hover" }"#;
        let partial: Options = serde_json::from_str(json).unwrap();
        assert_eq!(partial.debounce_delay, DEFAULT_DEBOUNCE_DELAY);
    }
}
