use egui::{Align2, Context, Grid, Id, RichText, Ui, Window};
use userdeck_business::SelectionState;
use userdeck_states::StateCtx;

/// Detail window for the selected user, shown while the modal flag is set.
pub fn user_modal(state_ctx: &mut StateCtx, ctx: &Context) {
    let selection = state_ctx.state::<SelectionState>();
    if !selection.modal_open() {
        return;
    }
    let Some(user) = selection.selected_user().cloned() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;

    Window::new(format!("User - {}", user.name))
        .id(Id::new("user_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            Grid::new("user_details")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    detail_row(ui, "ID", &user.id.to_string());
                    detail_row(ui, "Name", &user.name);
                    detail_row(ui, "Username", &user.username);
                    detail_row(ui, "Email", &user.email);
                    for (label, value) in user.extra_fields() {
                        detail_row(ui, &label, &value);
                    }
                });

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        state_ctx
            .state_mut::<SelectionState>()
            .set_modal_open(false);
    }
}

fn detail_row(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).strong());
    ui.label(value);
    ui.end_row();
}
