use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::sync::mpsc::{self, Receiver, TryRecvError},
};

use crate::{
    Cli,
    app::DashState,
    config::SheetsConfig,
    data::{SheetsError, load_market_table},
    domain::MarketTable,
    ui::{UI_CONFIG, render_dashboard, render_error, render_loading},
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

pub struct App {
    state: DashState,
    data_rx: Option<Receiver<Result<MarketTable, SheetsError>>>,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        // Config is resolved once, here, and moves into the fetch task.
        let config = SheetsConfig::resolve(&args);
        let (data_tx, data_rx) = mpsc::channel();

        #[cfg(not(target_arch = "wasm32"))]
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            rt.block_on(async move {
                let _ = data_tx.send(load_market_table(&config).await);
            });
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let _ = data_tx.send(load_market_table(&config).await);
        });

        Self {
            state: DashState::Loading,
            data_rx: Some(data_rx),
        }
    }

    /// Loading is the only state that can transition. Once the channel has
    /// delivered (or died) the receiver is dropped and the state is final.
    fn poll_fetch(&mut self) {
        if !matches!(self.state, DashState::Loading) {
            return;
        }
        let Some(rx) = &self.data_rx else { return };

        match rx.try_recv() {
            Ok(result) => {
                self.state = DashState::from_fetch(result);
                self.data_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Fetch task died without sending; surface it instead of
                // showing the spinner forever.
                log::error!("data task ended without delivering a result");
                self.state = DashState::Error("data load stopped unexpectedly".to_string());
                self.data_rx = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.poll_fetch();
        match &self.state {
            DashState::Loading => {
                render_loading(ctx);
                ctx.request_repaint();
            }
            DashState::Ready(table) => render_dashboard(ctx, table),
            DashState::Error(message) => render_error(ctx, message),
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.background;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
