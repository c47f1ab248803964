// Components module - reusable UI building blocks
//
// - Roster panel: past, current and upcoming speeches
// - Hints panel: key reference
// - Clock bar: total elapsed time
// - Prompt bar: name entry and autocomplete
// - Status bar: pending counts, latest warning
//
// Each component is a `render(f, area, app)` function.

pub mod clock_bar;
pub mod formatters;
pub mod hints_panel;
pub mod prompt_bar;
pub mod roster_panel;
pub mod status_bar;
pub mod toast;

pub use toast::Toast;
