use crate::error::ChatError;
use serde::{Deserialize, Serialize};

/// Closed interval a sampling knob must fall into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    /// NaN is outside every range.
    pub fn check(&self, value: f64) -> Result<f64, ChatError> {
        if self.min <= value && value <= self.max {
            Ok(value)
        } else {
            Err(ChatError::ParameterOutOfRange {
                name: self.name,
                min: self.min,
                max: self.max,
                value,
            })
        }
    }
}

pub const TEMPERATURE: ParameterRange = ParameterRange::new("temperature", 0.0, 2.0);
pub const TOP_PROBABILITY: ParameterRange = ParameterRange::new("top_probability", 0.0, 1.0);
pub const PRESENCE_PENALTY: ParameterRange = ParameterRange::new("presence_penalty", -2.0, 2.0);
pub const FREQUENCY_PENALTY: ParameterRange = ParameterRange::new("frequency_penalty", -2.0, 2.0);
pub const CHOICE_COUNT: ParameterRange = ParameterRange::new("choice_count", 0.0, 1024.0);

/// The four generation knobs sent alongside a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParameters {
    pub temperature: f64,
    pub top_probability: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_probability: 1.0,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
        }
    }
}

impl SamplingParameters {
    /// Checks every knob in a fixed order and fails on the first one out of range.
    pub fn validate(&self) -> Result<(), ChatError> {
        TEMPERATURE.check(self.temperature)?;
        TOP_PROBABILITY.check(self.top_probability)?;
        PRESENCE_PENALTY.check(self.presence_penalty)?;
        FREQUENCY_PENALTY.check(self.frequency_penalty)?;
        Ok(())
    }

    pub fn get(&self, knob: Knob) -> f64 {
        match knob {
            Knob::Temperature => self.temperature,
            Knob::TopProbability => self.top_probability,
            Knob::PresencePenalty => self.presence_penalty,
            Knob::FrequencyPenalty => self.frequency_penalty,
        }
    }

    /// Leaves the current value untouched when `value` is out of range.
    pub fn set(&mut self, knob: Knob, value: f64) -> Result<(), ChatError> {
        let value = knob.range().check(value)?;
        let slot = match knob {
            Knob::Temperature => &mut self.temperature,
            Knob::TopProbability => &mut self.top_probability,
            Knob::PresencePenalty => &mut self.presence_penalty,
            Knob::FrequencyPenalty => &mut self.frequency_penalty,
        };
        *slot = value;
        Ok(())
    }
}

/// One of the four user-adjustable knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Knob {
    Temperature,
    TopProbability,
    PresencePenalty,
    FrequencyPenalty,
}

impl Knob {
    pub const ALL: [Knob; 4] = [
        Knob::Temperature,
        Knob::TopProbability,
        Knob::PresencePenalty,
        Knob::FrequencyPenalty,
    ];

    pub fn range(&self) -> ParameterRange {
        match self {
            Knob::Temperature => TEMPERATURE,
            Knob::TopProbability => TOP_PROBABILITY,
            Knob::PresencePenalty => PRESENCE_PENALTY,
            Knob::FrequencyPenalty => FREQUENCY_PENALTY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Knob::Temperature => "Temperature",
            Knob::TopProbability => "Top probability",
            Knob::PresencePenalty => "Presence penalty",
            Knob::FrequencyPenalty => "Frequency penalty",
        }
    }
}

pub fn validate_choice_count(choice_count: u32) -> Result<u32, ChatError> {
    CHOICE_COUNT.check(f64::from(choice_count))?;
    Ok(choice_count)
}
