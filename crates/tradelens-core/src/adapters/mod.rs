mod fixture;
mod yahoo;

pub use fixture::FixtureProvider;
pub use yahoo::YahooDailyAdapter;
