use weather_core::{ParseUnitsError, Units, WeatherProvider, WeatherQueryResult};

/// State of one interactive run: the provider and the selected unit system.
#[derive(Debug)]
pub struct Session {
    provider: Box<dyn WeatherProvider>,
    units: Units,
}

impl Session {
    pub fn new(provider: Box<dyn WeatherProvider>, units: Units) -> Self {
        Self { provider, units }
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// Switch unit system. A rejected value leaves the current one in place.
    pub fn set_units(&mut self, raw: &str) -> Result<Units, ParseUnitsError> {
        let units = raw.parse()?;
        self.units = units;
        Ok(units)
    }

    pub async fn lookup(&self, city: &str) -> WeatherQueryResult {
        self.provider.fetch(city.trim(), self.units).await
    }
}
