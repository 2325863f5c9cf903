use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    Shared,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripOptions {
    pub booking_type: BookingType,
    #[serde(default)]
    pub scheduled_later: bool,
    #[serde(default = "default_passenger_count")]
    pub passenger_count: u32,
}

fn default_passenger_count() -> u32 {
    1
}

impl TripOptions {
    pub fn shared(passenger_count: u32) -> Self {
        Self {
            booking_type: BookingType::Shared,
            scheduled_later: false,
            passenger_count,
        }
    }

    pub fn private() -> Self {
        Self {
            booking_type: BookingType::Private,
            scheduled_later: false,
            passenger_count: 1,
        }
    }

    pub fn scheduled(self) -> Self {
        Self {
            scheduled_later: true,
            ..self
        }
    }

    /// Passenger count used as a divisor, never below one.
    pub fn fare_splits(&self) -> u32 {
        self.passenger_count.max(1)
    }
}

#[test]
fn missing_fields_take_defaults() {
    let options: TripOptions = serde_json::from_str(r#"{"booking_type":"private"}"#).unwrap();

    assert_eq!(options, TripOptions::private());
}
