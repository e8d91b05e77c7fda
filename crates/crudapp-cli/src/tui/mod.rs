mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::oneshot;

use app::{ItemsApp, Outcome, Request};

use crate::api::ItemsClient;

pub async fn run(client: ItemsClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ItemsApp::new();
    let result = run_loop(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ItemsApp,
    client: ItemsClient,
) -> Result<()> {
    let mut in_flight: Option<oneshot::Receiver<Outcome>> = None;

    if let Some(request) = app.load() {
        in_flight = Some(spawn_request(&client, request));
    }

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for events with timeout to allow checking the in-flight request
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            if let Some(request) = input::handle_event(app, event) {
                in_flight = Some(spawn_request(&client, request));
            }
        }

        if let Some(rx) = in_flight.as_mut() {
            match rx.try_recv() {
                Ok(outcome) => {
                    app.apply(outcome);
                    in_flight = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    app.request_lost();
                    in_flight = None;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn spawn_request(client: &ItemsClient, request: Request) -> oneshot::Receiver<Outcome> {
    let (tx, rx) = oneshot::channel();
    let client = client.clone();

    tokio::spawn(async move {
        let _ = tx.send(execute_request(&client, request).await);
    });

    rx
}

async fn execute_request(client: &ItemsClient, request: Request) -> Outcome {
    let text = |e: anyhow::Error| format!("{:#}", e);

    match request {
        Request::Fetch => Outcome::Fetched(client.list_items().await.map_err(text)),
        Request::Create { name } => Outcome::Created(client.create_item(&name).await.map_err(text)),
        Request::Update { id, name } => {
            let result = client.update_item(&id, &name).await.map_err(text);
            Outcome::Updated { id, result }
        }
        Request::Delete { id } => {
            let result = client.delete_item(&id).await.map(|_| ()).map_err(text);
            Outcome::Deleted { id, result }
        }
    }
}
