pub mod rho_record;
pub mod split;
pub mod tract;
pub mod window;

// re-export for cleaner imports
pub use self::rho_record::RhoRecord;
pub use self::split::Split;
pub use self::tract::Tract;
pub use self::window::{Window, WindowPair};
