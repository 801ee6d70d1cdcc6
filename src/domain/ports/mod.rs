mod geo_data_port;
mod preference_port;

pub use geo_data_port::GeoDataPort;
pub use preference_port::PreferencePort;
