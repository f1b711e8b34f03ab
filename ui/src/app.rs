use userdeck_business::{LoadUsersPageCommand, load_current_page};

use crate::{state::State, widgets};

pub struct UserDeckApp {
    pub state: State,
    mounted: bool,
}

impl UserDeckApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            mounted: false,
        }
    }
}

impl eframe::App for UserDeckApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results published by running commands.
        self.state.ctx.sync_states();

        if !self.mounted {
            self.mounted = true;
            load_current_page(&mut self.state.ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_page(&mut self.state.ctx, ui);
        });

        widgets::user_modal(&mut self.state.ctx, ctx);

        // Keep polling while a load is in flight; nothing else wakes the UI.
        if self.state.ctx.has_pending_tasks::<LoadUsersPageCommand>() {
            ctx.request_repaint();
        }
    }
}
