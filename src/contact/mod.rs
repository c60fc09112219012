pub mod links;
pub mod simulated;
pub mod traits;

pub use links::DeepLinks;
pub use simulated::SimulatedSender;
pub use traits::MessageSender;
