pub mod lookup;
pub mod settings;
