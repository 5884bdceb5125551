//! Pipeline configuration structures.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Tick;

/// How many due slots a single clock advance may free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePolicy {
    /// Free only the earliest slot per tick, even if more are due.
    #[default]
    SinglePerTick,
    /// Free every slot that is due at the new tick.
    DrainDue,
}

impl FromStr for ReleasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "single_per_tick" => Ok(Self::SinglePerTick),
            "drain_due" => Ok(Self::DrainDue),
            other => Err(format!("unknown release policy `{other}`")),
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of intake stations (order queues).
    pub station_count: usize,
    /// Concurrent slots on the shared resource.
    pub resource_capacity: u32,
    /// Ticks one unit of work occupies a slot.
    pub cook_duration: Tick,
    /// Real-time pacing of the clock actor in milliseconds.
    pub tick_interval_ms: u64,
    /// Ticks between finishing on the resource and hand-off to the customer.
    pub handoff_ticks: Tick,
    /// Release behaviour of each clock advance.
    pub release_policy: ReleasePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            station_count: 3,
            resource_capacity: 4,
            cook_duration: 10,
            tick_interval_ms: 10,
            handoff_ticks: 1,
            release_policy: ReleasePolicy::SinglePerTick,
        }
    }
}

impl PipelineConfig {
    /// Environment variable for [`Self::station_count`].
    pub const ENV_STATION_COUNT: &'static str = "PIPELINE_STATION_COUNT";
    /// Environment variable for [`Self::resource_capacity`].
    pub const ENV_RESOURCE_CAPACITY: &'static str = "PIPELINE_RESOURCE_CAPACITY";
    /// Environment variable for [`Self::cook_duration`].
    pub const ENV_COOK_DURATION: &'static str = "PIPELINE_COOK_DURATION";
    /// Environment variable for [`Self::tick_interval_ms`].
    pub const ENV_TICK_INTERVAL_MS: &'static str = "PIPELINE_TICK_INTERVAL_MS";
    /// Environment variable for [`Self::handoff_ticks`].
    pub const ENV_HANDOFF_TICKS: &'static str = "PIPELINE_HANDOFF_TICKS";
    /// Environment variable for [`Self::release_policy`].
    pub const ENV_RELEASE_POLICY: &'static str = "PIPELINE_RELEASE_POLICY";

    /// Builder-style setter for the station count.
    #[must_use]
    pub fn with_station_count(mut self, station_count: usize) -> Self {
        self.station_count = station_count;
        self
    }

    /// Builder-style setter for the resource capacity.
    #[must_use]
    pub fn with_resource_capacity(mut self, resource_capacity: u32) -> Self {
        self.resource_capacity = resource_capacity;
        self
    }

    /// Builder-style setter for the cook duration.
    #[must_use]
    pub fn with_cook_duration(mut self, cook_duration: Tick) -> Self {
        self.cook_duration = cook_duration;
        self
    }

    /// Builder-style setter for the clock cadence.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Builder-style setter for the hand-off delay added to every wait.
    #[must_use]
    pub fn with_handoff_ticks(mut self, handoff_ticks: Tick) -> Self {
        self.handoff_ticks = handoff_ticks;
        self
    }

    /// Builder-style setter for the release policy.
    #[must_use]
    pub fn with_release_policy(mut self, release_policy: ReleasePolicy) -> Self {
        self.release_policy = release_policy;
        self
    }

    /// Clock cadence as a [`Duration`].
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.station_count == 0 {
            return Err("station_count must be greater than 0".into());
        }
        if self.resource_capacity == 0 {
            return Err("resource_capacity must be greater than 0".into());
        }
        if self.cook_duration == 0 {
            return Err("cook_duration must be greater than 0".into());
        }
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from `PIPELINE_*` environment variables, reading a
    /// `.env` file first if one exists. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation message.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup and validate.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation message.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = parse_var(&lookup, Self::ENV_STATION_COUNT)? {
            cfg.station_count = v;
        }
        if let Some(v) = parse_var(&lookup, Self::ENV_RESOURCE_CAPACITY)? {
            cfg.resource_capacity = v;
        }
        if let Some(v) = parse_var(&lookup, Self::ENV_COOK_DURATION)? {
            cfg.cook_duration = v;
        }
        if let Some(v) = parse_var(&lookup, Self::ENV_TICK_INTERVAL_MS)? {
            cfg.tick_interval_ms = v;
        }
        if let Some(v) = parse_var(&lookup, Self::ENV_HANDOFF_TICKS)? {
            cfg.handoff_ticks = v;
        }
        if let Some(v) = parse_var(&lookup, Self::ENV_RELEASE_POLICY)? {
            cfg.release_policy = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().map_err(|e| format!("{key}: {e}")))
        .transpose()
}
