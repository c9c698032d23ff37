// Daily forecast summary domain model
use serde::Deserialize;

/// One day of a city's forecast as shown in the day list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayForecast {
    pub date: String,
    pub condition: String,
    pub icon: String,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    /// Live reading, present only for the current day.
    #[serde(default)]
    pub current_temp_c: Option<f64>,
}

impl DayForecast {
    /// Label for the temperature column: the live reading when the
    /// provider supplies one, otherwise the day's max/min span.
    pub fn temperature_label(&self) -> String {
        match self.current_temp_c {
            Some(temp) => format!("{temp:.0}°"),
            None => format!("{:.0}°/{:.0}°", self.max_temp_c, self.min_temp_c),
        }
    }
}
