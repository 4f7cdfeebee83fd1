//! Renders the bundled overworld into an in-memory terminal.

use client_bootstrap::{BootstrapConfig, RuntimeBuilder};
use client_frontend_cli::{
    UiConfig,
    presentation::{
        ui::{RenderContext, UiLayout, render_with_view_model},
        widgets,
    },
};
use client_frontend_core::{MessageLog, ViewModel};
use game_core::{GameConfig, PlayerInput};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 36;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn draws_the_village_and_the_hud() {
    let config = BootstrapConfig {
        game_seed: Some(11),
        ..BootstrapConfig::default()
    };
    let mut runtime = RuntimeBuilder::new().config(config).build().unwrap().runtime;

    let ui = UiConfig::default();
    let layout = UiLayout::new(
        Rect::new(0, 0, WIDTH, HEIGHT),
        &ui,
        widgets::hud::height(GameConfig::MAX_INVENTORY_SLOTS),
    );
    let (width, height) = layout.map_viewport();
    runtime.resize_viewport(width, height);
    runtime.step(PlayerInput::IDLE, 16).unwrap();

    let env = runtime.oracles().as_game_env();
    let view_model = ViewModel::from_state(runtime.state(), &env).unwrap();
    let mut messages = MessageLog::new(8);
    messages.push_text("Welcome, traveller.");

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    render_with_view_model(
        &mut terminal,
        &RenderContext {
            view_model: &view_model,
            messages: &messages,
            ui: &ui,
        },
    )
    .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("Health: 100/100"));
    assert!(screen.contains("Damage: 26"));
    assert!(screen.contains("Rate: 600 ms"));
    assert!(screen.contains("(none)"));
    assert!(screen.contains("Garth"));
    assert!(screen.contains("Welcome, traveller."));
    assert!(screen.contains('@'));
}
