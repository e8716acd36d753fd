//! The converter shell: the form with the raw text fields and the direction slider
//! on top of the [`dmsconv_types`] conversions.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unused_qualifications)]

pub use dmsconv_types as types;

pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use events::{EventBus, SubscriptionId};
pub use form::{
    validate_numeric_input, ConversionEvent, ConverterForm, DecimalPanel, DirectionSlider,
    DmsPanel, Field, FieldValue,
};

pub mod config;
pub mod error;
pub mod events;
pub mod form;
