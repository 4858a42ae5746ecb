mod provider;

pub use provider::AppVeyorProvider;
