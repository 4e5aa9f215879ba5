//! Animation families, behaviours and durations

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use maya_core::{CoreError, PropValue};
use serde::{Deserialize, Serialize};

/// Family an animation name belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationType {
    AttentionSeekers,
    BouncingEntrances,
    BouncingExits,
    FadingEntrances,
    FadingExits,
    Flippers,
    Lightspeed,
    RotatingEntrances,
    RotatingExits,
    SlidingEntrances,
    SlidingExits,
    Specials,
    ZoomingEntrances,
    ZoomingExits,
}

impl AnimationType {
    pub const ALL: [AnimationType; 14] = [
        AnimationType::AttentionSeekers,
        AnimationType::BouncingEntrances,
        AnimationType::BouncingExits,
        AnimationType::FadingEntrances,
        AnimationType::FadingExits,
        AnimationType::Flippers,
        AnimationType::Lightspeed,
        AnimationType::RotatingEntrances,
        AnimationType::RotatingExits,
        AnimationType::SlidingEntrances,
        AnimationType::SlidingExits,
        AnimationType::Specials,
        AnimationType::ZoomingEntrances,
        AnimationType::ZoomingExits,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationType::AttentionSeekers => "attention_seekers",
            AnimationType::BouncingEntrances => "bouncing_entrances",
            AnimationType::BouncingExits => "bouncing_exits",
            AnimationType::FadingEntrances => "fading_entrances",
            AnimationType::FadingExits => "fading_exits",
            AnimationType::Flippers => "flippers",
            AnimationType::Lightspeed => "lightspeed",
            AnimationType::RotatingEntrances => "rotating_entrances",
            AnimationType::RotatingExits => "rotating_exits",
            AnimationType::SlidingEntrances => "sliding_entrances",
            AnimationType::SlidingExits => "sliding_exits",
            AnimationType::Specials => "specials",
            AnimationType::ZoomingEntrances => "zooming_entrances",
            AnimationType::ZoomingExits => "zooming_exits",
        }
    }
}

impl FromStr for AnimationType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::unknown("animation type", s))
    }
}

/// Whether an animation plays once or loops forever
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationBehaviour {
    #[default]
    #[serde(rename = "animateOnce")]
    AnimateOnce,
    #[serde(rename = "animateLoop")]
    AnimateLoop,
}

impl AnimationBehaviour {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationBehaviour::AnimateOnce => "animateOnce",
            AnimationBehaviour::AnimateLoop => "animateLoop",
        }
    }
}

impl FromStr for AnimationBehaviour {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "animateOnce" => Ok(AnimationBehaviour::AnimateOnce),
            "animateLoop" => Ok(AnimationBehaviour::AnimateLoop),
            other => Err(CoreError::unknown("animation behaviour", other)),
        }
    }
}

/// Playback speed of an animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationDuration {
    Faster,
    Fast,
    #[default]
    Normal,
    Slow,
    Slower,
    /// Explicit duration in milliseconds
    Millis(u32),
}

impl AnimationDuration {
    pub fn millis(self) -> u32 {
        match self {
            AnimationDuration::Faster => 500,
            AnimationDuration::Fast => 800,
            AnimationDuration::Normal => 1000,
            AnimationDuration::Slow => 2000,
            AnimationDuration::Slower => 3000,
            AnimationDuration::Millis(ms) => ms,
        }
    }

    /// Named speed modifier, if any. `Normal` and explicit durations have none.
    pub fn modifier(self) -> Option<&'static str> {
        match self {
            AnimationDuration::Faster => Some("faster"),
            AnimationDuration::Fast => Some("fast"),
            AnimationDuration::Slow => Some("slow"),
            AnimationDuration::Slower => Some("slower"),
            AnimationDuration::Normal | AnimationDuration::Millis(_) => None,
        }
    }

    /// Read a duration from a property value: a speed name or milliseconds
    pub fn from_value(value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Text(s) => match s.parse() {
                Ok(duration) => Some(duration),
                Err(err) => {
                    tracing::warn!("ignoring animation duration: {}", err);
                    None
                }
            },
            PropValue::Number(ms) if *ms >= 0.0 => Some(AnimationDuration::Millis(ms.round() as u32)),
            _ => None,
        }
    }
}

impl FromStr for AnimationDuration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "faster" => Ok(AnimationDuration::Faster),
            "fast" => Ok(AnimationDuration::Fast),
            "normal" => Ok(AnimationDuration::Normal),
            "slow" => Ok(AnimationDuration::Slow),
            "slower" => Ok(AnimationDuration::Slower),
            other => Err(CoreError::unknown("animation duration", other)),
        }
    }
}

impl Display for AnimationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AnimationType> for PropValue {
    fn from(value: AnimationType) -> Self {
        PropValue::Text(value.as_str().to_string())
    }
}

impl From<AnimationBehaviour> for PropValue {
    fn from(value: AnimationBehaviour) -> Self {
        PropValue::Text(value.as_str().to_string())
    }
}

impl From<AnimationDuration> for PropValue {
    fn from(value: AnimationDuration) -> Self {
        match value.modifier() {
            Some(name) => PropValue::Text(name.to_string()),
            None if value == AnimationDuration::Normal => PropValue::Text("normal".to_string()),
            None => PropValue::Number(value.millis() as f64),
        }
    }
}
