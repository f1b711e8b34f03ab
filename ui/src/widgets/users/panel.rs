use egui::{Response, TextEdit, Ui};
use userdeck_business::{LoadState, ViewFilterState};
use userdeck_states::StateCtx;

use super::{pagination_bar, users_table};
use crate::utils::colors::{COLOR_BLUE, COLOR_RED};

pub const SEARCH_HINT: &str = "search users...";

/// Search box, inline error, table (or spinner while loading) and pagination.
pub fn users_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        search_box(state_ctx, ui);
        ui.add_space(8.0);

        if let Some(error) = state_ctx.state::<LoadState>().error_message() {
            ui.colored_label(COLOR_RED, error);
        }

        if state_ctx.state::<LoadState>().is_loading {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().color(COLOR_BLUE));
                ui.label("Loading users...");
            });
        } else {
            users_table(state_ctx, ui);
        }

        ui.add_space(8.0);
        pagination_bar(state_ctx, ui);
    })
    .response
}

fn search_box(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let filter = state_ctx.state_mut::<ViewFilterState>();
    ui.add(
        TextEdit::singleline(&mut filter.search_text)
            .hint_text(SEARCH_HINT)
            .desired_width(f32::INFINITY),
    );
}
