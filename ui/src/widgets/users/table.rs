//! Users table: three sortable columns, zebra rows, click a row for details.

use egui::{Button, CursorIcon, Frame, Grid, Label, RichText, ScrollArea, Sense, Stroke, Ui};
use userdeck_business::{LoadedUsers, SelectionState, SortKey, UserRecord, ViewFilterState};
use userdeck_states::StateCtx;

use crate::utils::colors::TABLE_BORDER_COLOR;

const MIN_COLUMN_WIDTH: f32 = 140.0;

pub fn header_label(key: SortKey) -> String {
    format!("{} ⬆⬇", key.label())
}

pub fn users_table(state_ctx: &mut StateCtx, ui: &mut Ui) {
    // Recomputed every frame from the loaded page and the current filter.
    let rows: Vec<UserRecord> = state_ctx
        .state::<ViewFilterState>()
        .visible_users(state_ctx.state::<LoadedUsers>().records())
        .into_iter()
        .cloned()
        .collect();

    let mut sort_by: Option<SortKey> = None;
    let mut activated: Option<usize> = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("users_table")
                    .num_columns(SortKey::ALL.len())
                    .striped(true)
                    .spacing([16.0, 8.0])
                    .min_col_width(MIN_COLUMN_WIDTH)
                    .show(ui, |ui| {
                        for key in SortKey::ALL {
                            if header_cell(ui, key) {
                                sort_by = Some(key);
                            }
                        }
                        ui.end_row();

                        for (index, user) in rows.iter().enumerate() {
                            if user_row(ui, user) {
                                activated = Some(index);
                            }
                            ui.end_row();
                        }
                    });
            });
        });

    if let Some(key) = sort_by {
        state_ctx
            .state_mut::<ViewFilterState>()
            .select_sort_key(key);
    }

    if let Some(user) = activated.and_then(|index| rows.into_iter().nth(index)) {
        state_ctx.state_mut::<SelectionState>().open_details(user);
    }
}

fn header_cell(ui: &mut Ui, key: SortKey) -> bool {
    ui.add(Button::new(RichText::new(header_label(key)).strong()).frame(false))
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}

/// Returns true if any cell of the row was clicked.
fn user_row(ui: &mut Ui, user: &UserRecord) -> bool {
    let mut clicked = false;
    for text in [&user.name, &user.email, &user.username] {
        clicked |= ui
            .add(Label::new(text.as_str()).sense(Sense::click()))
            .on_hover_cursor(CursorIcon::PointingHand)
            .clicked();
    }
    clicked
}
