//! Text inputs with optional validation.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{Input, InputProps, InputView, Validator};
pub use intent::InputIntent;
pub use reducer::InputReducer;
pub use state::{InputSlice, InputState};
