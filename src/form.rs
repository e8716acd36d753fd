//! The converter form: raw text fields, the direction slider
//! and the panels showing the results.
//!
//! Every change of a field recalculates the corresponding panel
//! and publishes the [`ConversionEvent`] on the bus.

use dmsconv_types::{DecimalAngle, Direction, DmsAngle};

use crate::{config::ShellConfig, events::EventBus};

const INVALID_NUMBERS: &str = "Please enter valid numeric values";
const MINUTES_SECONDS_RANGE: &str = "Minutes and seconds must be between 0 and 59.99";
const INVALID_DECIMAL: &str = "Please enter a valid decimal value";

/// The content of a numeric text field
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldValue {
    /// Nothing but whitespace
    Blank,
    /// A finite number
    Number(f64),
    /// Anything else
    Invalid,
}

impl FieldValue {
    /// Blank field is a valid one
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// The number in the field, zero for blank or invalid fields
    pub fn value_or_zero(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Blank | Self::Invalid => 0.0,
        }
    }
}

/// Classify the raw text of the field
pub fn validate_numeric_input(raw: &str) -> FieldValue {
    let raw = raw.trim();
    if raw.is_empty() {
        return FieldValue::Blank;
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => FieldValue::Number(value),
        _ => FieldValue::Invalid,
    }
}

/// The four-stop slider selecting the direction of the DMS angle
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DirectionSlider {
    position: usize,
}

impl DirectionSlider {
    const STOPS: [Direction; 4] = Direction::ALL;

    /// The slider at the given position, which may be out of range
    pub const fn new(position: usize) -> Self {
        Self { position }
    }

    /// The slider at the position of the direction
    pub fn at(direction: Direction) -> Self {
        let position = Self::STOPS
            .iter()
            .position(|&stop| stop == direction)
            .expect("Every direction has its stop");
        Self { position }
    }

    /// The current position
    pub const fn position(self) -> usize {
        self.position
    }

    /// The selected direction, North if the position is out of range
    pub fn direction(self) -> Direction {
        Self::STOPS
            .get(self.position)
            .copied()
            .unwrap_or(Direction::North)
    }

    /// The label to show next to the slider, e.g. `East (E)`
    pub fn label(self) -> Option<&'static str> {
        Self::STOPS.get(self.position).map(|dir| dir.label())
    }
}

/// The text fields of the form
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    /// Degrees of the DMS angle
    Degrees,
    /// Arc minutes of the DMS angle
    Minutes,
    /// Arc seconds of the DMS angle
    Seconds,
    /// Signed decimal degrees
    Decimal,
}

/// The output of the DMS to decimal conversion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DmsPanel {
    /// The DMS angle with its direction or the validation message
    pub formatted_dms: String,
    /// The decimal degrees with the direction, empty if the input is rejected
    pub decimal_result: String,
}

impl DmsPanel {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            formatted_dms: message.into(),
            decimal_result: String::new(),
        }
    }
}

/// The output of the decimal to DMS conversion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecimalPanel {
    /// The DMS angle with its direction or the validation message
    pub dms_result: String,
}

/// Published on every recalculation of the form
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionEvent {
    /// The DMS fields were converted into decimal degrees
    DecimalComputed {
        /// Validated input
        angle: DmsAngle,
        /// The result
        decimal: DecimalAngle,
        /// What to show
        panel: DmsPanel,
    },
    /// The DMS fields are rejected
    DmsRejected(DmsPanel),
    /// The decimal field was converted into DMS
    DmsComputed {
        /// The input
        decimal: DecimalAngle,
        /// The result with the guessed direction
        angle: DmsAngle,
        /// What to show
        panel: DecimalPanel,
    },
    /// The decimal field is rejected
    DecimalRejected(DecimalPanel),
}

impl ConversionEvent {
    /// The input was not converted
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::DmsRejected(_) | Self::DecimalRejected(_))
    }

    /// The non-empty lines of the updated panel
    pub fn lines(&self) -> Vec<&str> {
        let lines = match self {
            Self::DecimalComputed { panel, .. } | Self::DmsRejected(panel) => {
                vec![panel.formatted_dms.as_str(), panel.decimal_result.as_str()]
            }
            Self::DmsComputed { panel, .. } | Self::DecimalRejected(panel) => {
                vec![panel.dms_result.as_str()]
            }
        };
        lines.into_iter().filter(|line| !line.is_empty()).collect()
    }
}

/// The state of the converter form
#[derive(Debug, Clone)]
pub struct ConverterForm {
    config: ShellConfig,
    degrees: String,
    minutes: String,
    seconds: String,
    slider: DirectionSlider,
    decimal: String,
}

impl ConverterForm {
    /// Empty form with the slider at the configured direction
    pub fn new(config: ShellConfig) -> Self {
        let slider = DirectionSlider::at(config.default_direction);
        Self {
            config,
            degrees: String::new(),
            minutes: String::new(),
            seconds: String::new(),
            slider,
            decimal: String::new(),
        }
    }

    /// The initial calculation of both panels
    pub fn setup(&self, bus: &mut EventBus<ConversionEvent>) -> (ConversionEvent, ConversionEvent) {
        let dms = publish(self.dms_to_decimal(), bus);
        let decimal = publish(self.decimal_to_dms(), bus);
        (dms, decimal)
    }

    /// Change the text of the field and recalculate
    pub fn input(
        &mut self,
        field: Field,
        text: &str,
        bus: &mut EventBus<ConversionEvent>,
    ) -> ConversionEvent {
        let target = match field {
            Field::Degrees => &mut self.degrees,
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
            Field::Decimal => &mut self.decimal,
        };
        text.clone_into(target);

        let event = if field == Field::Decimal {
            self.decimal_to_dms()
        } else {
            self.dms_to_decimal()
        };
        publish(event, bus)
    }

    /// Move the slider and recalculate the DMS panel
    pub fn slide(&mut self, position: usize, bus: &mut EventBus<ConversionEvent>) -> ConversionEvent {
        self.slider = DirectionSlider::new(position);
        publish(self.dms_to_decimal(), bus)
    }

    /// Move the slider to the direction and recalculate the DMS panel
    pub fn select(
        &mut self,
        direction: Direction,
        bus: &mut EventBus<ConversionEvent>,
    ) -> ConversionEvent {
        self.slide(DirectionSlider::at(direction).position(), bus)
    }

    /// The current slider
    pub const fn slider(&self) -> DirectionSlider {
        self.slider
    }

    /// Convert the DMS fields without publishing
    pub fn dms_to_decimal(&self) -> ConversionEvent {
        let values =
            [&self.degrees, &self.minutes, &self.seconds].map(|raw| validate_numeric_input(raw));
        if !values.iter().all(|value| value.is_valid()) {
            log::warn!("Non-numeric DMS input: {values:?}");
            return ConversionEvent::DmsRejected(DmsPanel::rejected(INVALID_NUMBERS));
        }

        let [degrees, minutes, seconds] = values.map(FieldValue::value_or_zero);
        let sexagesimal = 0.0..60.0;
        if !sexagesimal.contains(&minutes) || !sexagesimal.contains(&seconds) {
            log::warn!("Minutes {minutes} or seconds {seconds} out of range");
            return ConversionEvent::DmsRejected(DmsPanel::rejected(MINUTES_SECONDS_RANGE));
        }

        let direction = self.slider.direction();
        let angle = match DmsAngle::new(direction, degrees, minutes, seconds) {
            Ok(angle) => angle,
            Err(err) => {
                log::warn!("Invalid DMS angle: {err}");
                return ConversionEvent::DmsRejected(DmsPanel::rejected(err.to_string()));
            }
        };

        let decimal = angle.to_decimal();
        log::debug!("{angle} -> {decimal}");
        let panel = DmsPanel {
            formatted_dms: format!("{:.*}", self.config.seconds_places, angle),
            decimal_result: format!(
                "{:.*} ({})",
                self.config.decimal_places, decimal, direction
            ),
        };
        ConversionEvent::DecimalComputed {
            angle,
            decimal,
            panel,
        }
    }

    /// Convert the decimal field without publishing
    pub fn decimal_to_dms(&self) -> ConversionEvent {
        let value = validate_numeric_input(&self.decimal);
        if !value.is_valid() {
            log::warn!("Non-numeric decimal input: {:?}", self.decimal);
            return ConversionEvent::DecimalRejected(DecimalPanel {
                dms_result: INVALID_DECIMAL.to_string(),
            });
        }

        let decimal = DecimalAngle::new(value.value_or_zero());
        match decimal.to_dms() {
            Ok(angle) => {
                log::debug!("{decimal} -> {angle}");
                let panel = DecimalPanel {
                    dms_result: format!("{:.*}", self.config.seconds_places, angle),
                };
                ConversionEvent::DmsComputed {
                    decimal,
                    angle,
                    panel,
                }
            }
            Err(err) => {
                log::warn!("Cannot convert {decimal}: {err}");
                ConversionEvent::DecimalRejected(DecimalPanel {
                    dms_result: err.to_string(),
                })
            }
        }
    }
}

fn publish(event: ConversionEvent, bus: &mut EventBus<ConversionEvent>) -> ConversionEvent {
    let notified = bus.publish(&event);
    log::trace!("Refresh delivered to {notified} subscribers");
    event
}
