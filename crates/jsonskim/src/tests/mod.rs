mod coerce;
mod property_oracle;
