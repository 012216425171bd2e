// src/gui.rs

//! Native window for the search form.
//!
//! Each frame renders the `SearchView` into a `Page`, paints it, and feeds
//! the widget events back as `Action`s. Searches run on the tokio runtime and
//! report back over a channel drained at the top of the next frame.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use eframe::egui;
use tokio::runtime::Handle;

use crate::error::{AppError, Result};
use crate::services::{ArchiveClient, SearchOutcome, SearchRequest, fetch_snapshots};
use crate::view::{Action, Page, PanelBody, SearchView, Select};

pub const WINDOW_TITLE: &str = "Wayback Machine Search";

/// Open the search window and block until it is closed.
pub fn run(view: SearchView, client: Arc<dyn ArchiveClient>, runtime: Handle) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([360.0, 400.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SearchApp::new(view, client, runtime)))),
    )
    .map_err(AppError::gui)
}

/// Main application state
pub struct SearchApp {
    view: SearchView,
    client: Arc<dyn ArchiveClient>,
    runtime: Handle,
    /// Completed searches, sent from runtime tasks
    outcome_tx: Sender<Result<SearchOutcome>>,
    outcome_rx: Receiver<Result<SearchOutcome>>,
}

impl SearchApp {
    pub fn new(view: SearchView, client: Arc<dyn ArchiveClient>, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            view,
            client,
            runtime,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Apply searches that finished since the last frame.
    fn process_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.view.finish_search(outcome);
        }
    }

    fn handle(&mut self, ctx: &egui::Context, action: Action) {
        match self.view.dispatch(action) {
            Ok(Some(request)) => self.spawn_search(ctx, request),
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring form input: {}", e),
        }
    }

    fn spawn_search(&self, ctx: &egui::Context, request: SearchRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let outcome = fetch_snapshots(client.as_ref(), &request).await;
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for SearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_outcomes();

        let page = self.view.render();
        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            paint_page(ui, &page, &mut actions);
        });

        for action in actions {
            self.handle(ctx, action);
        }
    }
}

fn paint_page(ui: &mut egui::Ui, page: &Page, actions: &mut Vec<Action>) {
    ui.heading(page.heading);
    ui.add_space(12.0);

    let mut term = page.form.search.value.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut term)
            .hint_text(page.form.search.placeholder)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(Action::EditSearchTerm(term));
    }
    // Enter submits like the button would
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        actions.push(Action::Submit);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        paint_select(ui, &page.form.start, actions);
        ui.add_space(16.0);
        paint_select(ui, &page.form.end, actions);
    });

    ui.add_space(8.0);
    let submit = ui.add_enabled(
        page.form.submit.enabled,
        egui::Button::new(page.form.submit.label),
    );
    if submit.clicked() {
        actions.push(Action::Submit);
    }

    ui.separator();
    ui.label(egui::RichText::new(page.results.heading).size(20.0).strong());

    match &page.results.body {
        PanelBody::Loading(text) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(*text);
            });
        }
        PanelBody::Entries(blocks) => {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for block in blocks {
                    ui.label(egui::RichText::new(&block.heading).size(16.0).strong());
                    ui.label(egui::RichText::new(&block.body).small().weak());
                    ui.add_space(12.0);
                }
            });
        }
    }
}

fn paint_select(ui: &mut egui::Ui, select: &Select, actions: &mut Vec<Action>) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(select.label).small().strong());

        let mut chosen = select.selected.clone();
        egui::ComboBox::from_id_salt(select.field.name())
            .selected_text(select.selected_label())
            .show_ui(ui, |ui| {
                for option in &select.options {
                    ui.selectable_value(&mut chosen, option.value.clone(), option.label.as_str());
                }
            });

        if chosen != select.selected {
            actions.push(Action::SelectYear {
                field: select.field,
                value: chosen,
            });
        }
    });
}
