// Frame composition - lays out the components for one draw

use super::app::App;
use super::components::{clock_bar, hints_panel, prompt_bar, roster_panel, status_bar};
use super::layout;
use ratatui::{style::Style, widgets::Block, Frame};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Theme background under everything
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.fg)),
        area,
    );

    let regions = layout::regions(area, app.show_hints);

    roster_panel::render(f, regions.roster, app);
    if let Some(hints) = regions.hints {
        hints_panel::render(f, hints, app);
    }
    clock_bar::render(f, regions.clock, app);
    prompt_bar::render(f, regions.prompt, app);
    status_bar::render(f, regions.status, app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
