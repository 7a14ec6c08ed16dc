//! What to do with channel values outside of their range.

use crate::models::Channels;
use crate::Error;

/// How out of range input is treated.
///
/// Conversions are always total; the policy only decides whether a caller
/// wants bad input corrected or reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RangePolicy {
    /// Clamp channels into range, wrapping hue. NaN becomes the smallest
    /// value of the channel.
    #[default]
    Clamp,
    /// Reject any channel that is out of range or not finite.
    Reject,
}

impl RangePolicy {
    /// Apply the policy to a model, returning the model that should be
    /// converted.
    pub fn admit<M: Channels>(self, model: M) -> Result<M, Error> {
        match self {
            RangePolicy::Clamp => {
                let clamped = model.clamped();
                if clamped != model {
                    tracing::debug!(?model, ?clamped, "clamped out of range color");
                }
                Ok(clamped)
            }
            RangePolicy::Reject => {
                model.validate()?;
                Ok(model)
            }
        }
    }
}
