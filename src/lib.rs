//! tricolor keeps a single color viewable and editable in the RGB, CMYK and
//! HLS color models.
//!
//! ```rust
//! use tricolor::{Channel, Color};
//!
//! let color: Color = "#d2691e".parse().unwrap();
//! let cmyk = color.cmyk();
//! assert_eq!(cmyk.cyan, 0.0);
//!
//! // Editing one channel re-derives the other two models.
//! let darker = color.with(Channel::Key, 0.5);
//! assert_eq!(darker.to_hex(), "#804012");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod interpolate;
mod math;
pub mod models;
mod notation;
mod policy;
#[cfg(test)]
mod test;

pub use color::{Channel, Color, Component, Flags, HasSpace, Readout, Space};
pub use convert::{cmyk_to_rgb, hls_to_rgb, rgb_to_cmyk, rgb_to_hls};
pub use error::{Error, ParseColorError};
pub use interpolate::Interpolation;
pub use models::{Cmyk, Hls, Rgb};
pub use notation::Edit;
pub use policy::RangePolicy;
