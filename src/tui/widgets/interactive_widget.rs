//! Interactive widget trait extending ratatui's `StatefulWidget`.

use ratatui::widgets::StatefulWidget;

/// Extension trait for `StatefulWidget` that adds state updates and event
/// handling.
///
/// Overlays (help, navigation menu) and the status bar keep their state
/// between frames; the widget value itself is rebuilt every frame with the
/// current theme tokens.
pub trait InteractiveStatefulWidget: StatefulWidget {
    /// Input data type for updating state.
    type Input;
    /// Event type for handling (use `()` for non-interactive widgets).
    type Event;

    /// Update the widget's state with new input data.
    fn update_state(state: &mut Self::State, input: Self::Input);

    /// Handle an event. Returns true if the event was consumed.
    fn handle_event(_state: &mut Self::State, _event: Self::Event) -> bool {
        false
    }
}
