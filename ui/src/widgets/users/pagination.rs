use egui::{Align, Button, Layout, Ui};
use userdeck_business::{PageState, go_next, go_previous};
use userdeck_states::StateCtx;

/// Previous on the left, Next on the right, current page in between.
pub fn pagination_bar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let page = *state_ctx.state::<PageState>();
    let mut previous = false;
    let mut next = false;

    ui.horizontal(|ui| {
        previous = ui
            .add_enabled(page.can_go_previous(), Button::new("Previous"))
            .clicked();
        ui.label(format!("Page {}", page.page()));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            next = ui
                .add_enabled(page.can_go_next(), Button::new("Next"))
                .clicked();
        });
    });

    if previous {
        go_previous(state_ctx);
    }
    if next {
        go_next(state_ctx);
    }
}
