pub mod button_selector;
pub mod validated_input;
pub mod validation_feedback;

pub use button_selector::*;
pub use validated_input::*;
pub use validation_feedback::*;
