use client_core::{
    active_link,
    navigation::{BRAND_LINK, CANCEL_PATH},
    CancellationController, CancellationOutcome, DialogKind, DialogTone, Router, NAV_LINKS,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

const SUCCESS_BADGE_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);
const PARTIAL_BADGE_COLOR: egui::Color32 = egui::Color32::from_rgb(210, 153, 34);
const ERROR_BADGE_COLOR: egui::Color32 = egui::Color32::from_rgb(218, 54, 51);
const CANCELLING_STATUS_PREFIX: &str = "Cancelling booking";

pub struct BookingGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    router: Router,
    cancellation: CancellationController,
    status: String,
}

impl BookingGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        initial_path: impl Into<String>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            router: Router::new(initial_path),
            cancellation: CancellationController::new(),
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CancellationResolved { ticket, outcome } => {
                    self.cancellation.complete_submission(&ticket, outcome);
                    if !self.cancellation.is_request_in_flight()
                        && self.status.starts_with(CANCELLING_STATUS_PREFIX)
                    {
                        self.status.clear();
                    }
                }
                UiEvent::BackendUnavailable(message) => {
                    self.status = message;
                }
            }
        }
    }

    fn submit_cancellation(&mut self) {
        let Some(ticket) = self.cancellation.begin_submission() else {
            return;
        };
        self.status = format!("{CANCELLING_STATUS_PREFIX} {}...", ticket.booking_id);
        if let Err(BackendCommand::CancelBooking { ticket }) = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::CancelBooking { ticket },
            &mut self.status,
        ) {
            self.cancellation
                .complete_submission(&ticket, CancellationOutcome::network_failed());
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = egui::Button::new(egui::RichText::new(BRAND_LINK.label).strong())
                    .frame(false);
                if ui.add(brand).clicked() {
                    self.router.navigate(BRAND_LINK.path);
                }
                ui.separator();
                for link in NAV_LINKS {
                    let active = self.router.is_active(link.path);
                    if ui.add(egui::Button::new(link.label).selected(active)).clicked() {
                        self.router.navigate(link.path);
                    }
                }
            });
        });
    }

    fn show_cancel_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Cancel Journey");
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Booking ID").strong());
        ui.add(
            egui::TextEdit::singleline(self.cancellation.identifier_input_mut())
                .id_salt("booking_id_input")
                .hint_text("Enter Booking ID used while booking")
                .desired_width(320.0),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Cancel Booking").clicked() {
                self.submit_cancellation();
            }
            if self.cancellation.is_request_in_flight() {
                ui.spinner();
            }
        });
        if !self.status.is_empty() {
            ui.small(egui::RichText::new(&self.status).weak());
        }

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), 240.0));
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("Map unavailable").weak());
            });
        });
    }

    fn show_placeholder_page(&self, ui: &mut egui::Ui) {
        match active_link(self.router.current_path()) {
            Some(link) => {
                ui.heading(link.label);
                ui.label("This page is not available in the desktop client.");
            }
            None => {
                ui.heading("Page not found");
                ui.label(self.router.current_path());
            }
        }
    }

    fn show_outcome_dialog(&mut self, ctx: &egui::Context) {
        let Some(outcome) = self.cancellation.active_outcome() else {
            return;
        };
        let content = outcome.dialog_content();
        let badge_color = match content.tone {
            DialogTone::Confirmed => SUCCESS_BADGE_COLOR,
            DialogTone::Partial => PARTIAL_BADGE_COLOR,
            DialogTone::Failed => ERROR_BADGE_COLOR,
        };

        let mut keep_open = true;
        let mut close_clicked = false;
        egui::Window::new(content.title)
            .id(egui::Id::new(("cancellation_dialog", content.kind == DialogKind::Success)))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut keep_open)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&content.badge)
                        .strong()
                        .color(badge_color),
                );
                ui.add_space(6.0);
                for line in &content.lines {
                    ui.label(line);
                }
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if !keep_open || close_clicked {
            match content.kind {
                DialogKind::Success => self.cancellation.dismiss_success(),
                DialogKind::Error => self.cancellation.dismiss_error(),
            }
        }
    }
}

impl eframe::App for BookingGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_nav_bar(ctx);

        let dialog_open = self.cancellation.active_outcome().is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                if self.router.is_active(CANCEL_PATH) {
                    self.show_cancel_page(ui);
                } else {
                    self.show_placeholder_page(ui);
                }
            });
        });
        self.show_outcome_dialog(ctx);

        if self.cancellation.is_request_in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
