pub mod client;
pub mod construction;
pub mod glass_fill;
pub mod order;
pub mod profile_system;

pub use client::Client;
pub use construction::Construction;
pub use glass_fill::GlassFill;
pub use order::{ClientBrief, Order, OrderStatus};
pub use profile_system::ProfileSystem;
